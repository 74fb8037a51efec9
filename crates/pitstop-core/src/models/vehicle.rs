use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Matic,
    Manual,
}

/// What the user has told us about their motorcycle so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<u16>,
    pub transmission: Option<Transmission>,
}

impl VehicleProfile {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.transmission.is_none()
    }

    /// Fill in fields reported by `update`, keeping known values otherwise.
    pub fn merge(&mut self, update: &VehicleProfile) {
        if update.brand.is_some() {
            self.brand.clone_from(&update.brand);
        }
        if update.model.is_some() {
            self.model.clone_from(&update.model);
        }
        if update.year.is_some() {
            self.year = update.year;
        }
        if update.transmission.is_some() {
            self.transmission = update.transmission;
        }
    }

    /// Render as `brand: Honda, model: Beat, year: 2020`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(brand) = &self.brand {
            parts.push(format!("brand: {brand}"));
        }
        if let Some(model) = &self.model {
            parts.push(format!("model: {model}"));
        }
        if let Some(year) = self.year {
            parts.push(format!("year: {year}"));
        }
        if let Some(transmission) = self.transmission {
            let label = match transmission {
                Transmission::Matic => "matic",
                Transmission::Manual => "manual",
            };
            parts.push(format!("transmission: {label}"));
        }
        parts.join(", ")
    }
}
