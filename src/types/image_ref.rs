// ABOUTME: Stored registry image reference parsing.
// ABOUTME: Extracts logical container names from `:service.container.index` references.

/// Derive the logical container name from a registry image reference.
///
/// Images pushed to the platform registry are stored under references of the
/// shape `:service.container.index` (lowercase service and container labels,
/// numeric push index). For such references the middle label is the container
/// name. Any other reference passes through unchanged and acts as its own
/// name.
pub fn stored_container_name(image: &str) -> &str {
    parse_stored(image).unwrap_or(image)
}

fn parse_stored(image: &str) -> Option<&str> {
    let rest = image.strip_prefix(':')?;
    let mut labels = rest.split('.');
    let service = labels.next()?;
    let container = labels.next()?;
    let index = labels.next()?;
    if labels.next().is_some() {
        return None;
    }
    if !is_lowercase_label(service) || !is_lowercase_label(container) {
        return None;
    }
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(container)
}

fn is_lowercase_label(label: &str) -> bool {
    !label.is_empty() && label.bytes().all(|b| b.is_ascii_lowercase())
}
