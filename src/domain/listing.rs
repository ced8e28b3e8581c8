use serde::{Deserialize, Serialize};

/// A room or bedspace listing in its canonical shape.
///
/// Every source (JSON endpoint, spreadsheet CSV, embedded sample) is folded
/// into this struct by `domain::normalize`; nothing downstream looks at the
/// raw records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub tenant_type: String,
    pub room_types: Vec<String>,

    // Both bounds are set or neither is; price_min <= price_max.
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,

    pub distance: String,
    pub wifi: String,
    pub image: String,
    pub description: String,
}

impl Listing {
    /// The lowest price the listing discloses, if any.
    pub fn lowest_price(&self) -> Option<f64> {
        self.price_min.or(self.price_max)
    }

    /// Display label such as `₱1,150 — ₱2,000`.
    pub fn price_label(&self) -> String {
        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) if min != max => {
                format!("₱{} — ₱{}", format_peso(min), format_peso(max))
            }
            (Some(p), _) | (None, Some(p)) => format!("₱{}", format_peso(p)),
            (None, None) => "Price on request".to_string(),
        }
    }

    pub fn room_types_label(&self) -> String {
        self.room_types.join(", ")
    }
}

/// Formats an amount with thousands separators, keeping up to two decimals
/// only when the amount is fractional.
pub fn format_peso(amount: f64) -> String {
    // Formatting the float directly keeps amounts beyond u64 exact.
    let fixed = format!("{:.2}", amount.max(0.0));
    let (digits, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac == "00" {
        grouped
    } else {
        format!("{grouped}.{frac}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(min: Option<f64>, max: Option<f64>) -> Listing {
        Listing {
            id: "x".into(),
            title: "X".into(),
            tenant_type: "Mixed".into(),
            room_types: vec!["Bedspace".into()],
            price_min: min,
            price_max: max,
            distance: String::new(),
            wifi: String::new(),
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn formats_peso_amounts() {
        assert_eq!(format_peso(0.0), "0");
        assert_eq!(format_peso(950.0), "950");
        assert_eq!(format_peso(2300.0), "2,300");
        assert_eq!(format_peso(1234567.0), "1,234,567");
        assert_eq!(format_peso(1150.5), "1,150.50");
        assert_eq!(format_peso(1e20), "100,000,000,000,000,000,000");
    }

    #[test]
    fn price_label_shows_range_only_when_bounds_differ() {
        assert_eq!(listing(Some(1150.0), Some(2000.0)).price_label(), "₱1,150 — ₱2,000");
        assert_eq!(listing(Some(2300.0), Some(2300.0)).price_label(), "₱2,300");
        assert_eq!(listing(None, None).price_label(), "Price on request");
    }
}
