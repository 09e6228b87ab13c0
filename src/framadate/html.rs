//! Field lookups in returned pages

use scraper::{Html, Selector};

/// Attribute of the first element matching `selector`.
pub fn attribute(body: &str, selector: &str, name: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()?
        .value()
        .attr(name)
        .map(str::to_string)
}

/// Current value of the first form control matching `selector`.
///
/// Inputs carry it in `value`, textareas as their text content. Blank values
/// count as absent.
pub fn form_value(body: &str, selector: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;

    let value = if element.value().name() == "textarea" {
        element.text().collect::<String>()
    } else {
        element.value().attr("value")?.to_string()
    };

    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
