/// Alternate spellings mapped onto the tag the view understands.
const CHART_TYPE_ALIASES: &[(&str, &str)] = &[("polar", "radar"), ("polar area", "radar")];

/// Trim and lowercase a chart type, then resolve known aliases.
///
/// Unknown tags pass through; the view rejects the ones it cannot draw.
pub fn resolve_chart_type(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    CHART_TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(key)
}
