use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ценовая категория мест с цветом для отрисовки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub color: String,
}

/// Справочник tier id -> цвет
#[derive(Debug, Clone, Default)]
pub struct TierPalette {
    colors: HashMap<String, String>,
}

impl TierPalette {
    pub fn from_tiers(tiers: &[Tier]) -> Self {
        let colors = tiers
            .iter()
            .map(|tier| (tier.id.clone(), tier.color.clone()))
            .collect();
        Self { colors }
    }

    pub fn color_of(&self, tier_id: &str) -> Option<&str> {
        self.colors.get(tier_id).map(String::as_str)
    }
}
