// ABOUTME: Newest-image resolution over the registry feed.
// ABOUTME: Keeps the first image seen per logical container name.

use crate::api::RegistryImage;
use crate::types::stored_container_name;
use std::collections::{BTreeMap, BTreeSet};

/// Map each logical container name to its newest registry image.
///
/// `feed` is ordered newest-first by the platform, so the first reference
/// seen for a name is the newest. References in the platform's stored shape
/// contribute their middle label as the name; anything else counts as its own
/// name, so it can only ever resolve itself.
///
/// `expected` is a stopping criterion, not a filter: scanning stops once
/// every expected name has an image, but first-seen entries for other names
/// still enter the map.
pub(crate) fn newest_images<'a>(
    feed: &[RegistryImage],
    expected: impl IntoIterator<Item = &'a str>,
) -> BTreeMap<String, String> {
    let expected: BTreeSet<&str> = expected.into_iter().collect();

    let mut newest = BTreeMap::new();
    let mut covered = 0;
    for entry in feed {
        if covered == expected.len() {
            break;
        }

        let name = stored_container_name(&entry.image);
        if newest.contains_key(name) {
            continue;
        }
        if expected.contains(name) {
            covered += 1;
        }
        newest.insert(name.to_string(), entry.image.clone());
    }

    newest
}
