use serde::{Deserialize, Serialize};

/// Dish offered on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dish {
    /// Unique identifier of the dish.
    pub id: i32,
    /// Name shown on the menu card and in the dish selector.
    pub name: String,
    /// Price represented in the smallest currency unit (for example cents).
    pub price_cents: i32,
}

impl Dish {
    /// Price formatted for display, e.g. `$12.50`.
    pub fn formatted_price(&self) -> String {
        let sign = if self.price_cents < 0 { "-" } else { "" };
        let cents = self.price_cents.unsigned_abs();
        format!("{sign}${}.{:02}", cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(price_cents: i32) -> Dish {
        Dish {
            id: 1,
            name: "Ramen".to_string(),
            price_cents,
        }
    }

    #[test]
    fn formatted_price_pads_cents() {
        assert_eq!(dish(1250).formatted_price(), "$12.50");
        assert_eq!(dish(905).formatted_price(), "$9.05");
        assert_eq!(dish(0).formatted_price(), "$0.00");
    }

    #[test]
    fn formatted_price_keeps_sign() {
        assert_eq!(dish(-75).formatted_price(), "-$0.75");
    }
}
