//! Cell renderers
//!
//! A renderer receives the cell value, the mode the grid asks for and the
//! whole row. Only [`RenderMode::Display`] is decorated; sorting and
//! filtering always see the raw value so numbers sort as numbers.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use shared::models::PlanillaEstado;

use crate::classifier::is_truthy;

/// Symbol prefixed to colón amounts
pub const CURRENCY_SYMBOL: &str = "₡";

/// Date format shown in cells
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// What the grid is rendering a cell for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Display,
    Sort,
    Filter,
    Type,
}

impl RenderMode {
    /// Parse the grid's mode string (`display`, `sort`, `filter`, `type`)
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "display" => Some(RenderMode::Display),
            "sort" => Some(RenderMode::Sort),
            "filter" => Some(RenderMode::Filter),
            "type" => Some(RenderMode::Type),
            _ => None,
        }
    }
}

/// `(value, mode, row) -> rendered`
pub type CellRenderer = Arc<dyn Fn(&Value, RenderMode, &Value) -> Value + Send + Sync>;

/// Build a renderer from a display-only formatter
fn display_only<F>(format: F) -> CellRenderer
where
    F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
{
    Arc::new(move |value: &Value, mode: RenderMode, _row: &Value| match mode {
        RenderMode::Display => format(value)
            .map(Value::String)
            .unwrap_or_else(|| value.clone()),
        _ => value.clone(),
    })
}

fn decimal_of(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// `₡1,250,000.50`, negative amounts as `-₡75.00`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, grouped, frac_part)
}

/// Parse the date forms the backend sends: `2024-03-01`,
/// `2024-03-01 08:00:00`, `2024-03-01T08:00:00` or RFC 3339
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

fn badge(color: &str, label: &str) -> String {
    format!(r#"<span class="badge bg-{}">{}</span>"#, color, label)
}

/// Amount in colones
pub fn currency() -> CellRenderer {
    display_only(|value| decimal_of(value).map(format_currency))
}

/// Date as `dd/mm/yyyy`; unparseable text is shown as sent
pub fn date() -> CellRenderer {
    display_only(|value| value.as_str().and_then(parse_date).map(format_date))
}

/// Coloured badge for a planilla lifecycle status
pub fn estado_badge() -> CellRenderer {
    display_only(|value| {
        let text = value.as_str()?;
        Some(match text.parse::<PlanillaEstado>() {
            Ok(estado) => badge(estado.badge_color(), estado.as_str()),
            Err(_) => badge("light", text),
        })
    })
}

/// Active/inactive badge from a `1`/`0`, `true`/`false` or `"1"`/`"0"` flag
pub fn activo_badge() -> CellRenderer {
    display_only(|value| {
        let active = match value {
            Value::String(s) => !matches!(s.trim(), "" | "0" | "false"),
            other => is_truthy(other),
        };
        Some(if active {
            badge("success", "Activo")
        } else {
            badge("danger", "Inactivo")
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn show(renderer: &CellRenderer, value: Value) -> Value {
        renderer(&value, RenderMode::Display, &json!({}))
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::new(125000050, 2)), "₡1,250,000.50");
        assert_eq!(format_currency(Decimal::new(999, 0)), "₡999.00");
        assert_eq!(format_currency(Decimal::new(-75, 0)), "-₡75.00");
        assert_eq!(format_currency(Decimal::ZERO), "₡0.00");
        assert_eq!(format_currency(Decimal::new(1005, 3)), "₡1.01");
    }

    #[test]
    fn test_currency_renderer_modes() {
        let render = currency();
        assert_eq!(show(&render, json!(450000)), json!("₡450,000.00"));
        assert_eq!(show(&render, json!("1200.5")), json!("₡1,200.50"));
        assert_eq!(show(&render, json!(null)), json!(null));
        assert_eq!(render(&json!(450000), RenderMode::Sort, &json!({})), json!(450000));
    }

    #[test]
    fn test_date_renderer() {
        let render = date();
        assert_eq!(show(&render, json!("2024-03-01")), json!("01/03/2024"));
        assert_eq!(show(&render, json!("2024-03-01T06:00:00.000Z")), json!("01/03/2024"));
        assert_eq!(show(&render, json!("2024-12-31 23:00:00")), json!("31/12/2024"));
        assert_eq!(show(&render, json!("pendiente")), json!("pendiente"));
        assert_eq!(
            render(&json!("2024-03-01"), RenderMode::Filter, &json!({})),
            json!("2024-03-01")
        );
    }

    #[test]
    fn test_estado_badge() {
        let render = estado_badge();
        assert_eq!(
            show(&render, json!("En Proceso")),
            json!(r#"<span class="badge bg-warning">En Proceso</span>"#)
        );
        assert_eq!(
            show(&render, json!("cerrada")),
            json!(r#"<span class="badge bg-secondary">Cerrada</span>"#)
        );
        assert_eq!(
            show(&render, json!("Archivada")),
            json!(r#"<span class="badge bg-light">Archivada</span>"#)
        );
    }

    #[test]
    fn test_activo_badge() {
        let render = activo_badge();
        let active = json!(r#"<span class="badge bg-success">Activo</span>"#);
        let inactive = json!(r#"<span class="badge bg-danger">Inactivo</span>"#);
        assert_eq!(show(&render, json!(1)), active);
        assert_eq!(show(&render, json!("1")), active);
        assert_eq!(show(&render, json!(true)), active);
        assert_eq!(show(&render, json!(0)), inactive);
        assert_eq!(show(&render, json!("0")), inactive);
        assert_eq!(render(&json!(0), RenderMode::Sort, &json!({})), json!(0));
    }

    #[test]
    fn test_render_mode_parse() {
        assert_eq!(RenderMode::parse("display"), Some(RenderMode::Display));
        assert_eq!(RenderMode::parse("sort"), Some(RenderMode::Sort));
        assert!(RenderMode::parse("DISPLAY").is_none());
    }
}
