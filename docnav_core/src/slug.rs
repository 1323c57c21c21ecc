/// Convert human readable text into an identifier that is safe to use in
/// URLs and as an HTML `id`.
///
/// The text is lowercased, every run of characters outside `[a-z0-9]` is
/// collapsed into a single `-`, and any leading or trailing `-` is removed.
///
/// ```
/// use docnav_core::slugify;
///
/// assert_eq!(slugify("Sub, Section!"), "sub-section");
/// assert_eq!(slugify("  --Hello   World--  "), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
	let mut slug = String::with_capacity(text.len());
	let mut pending_separator = false;

	for ch in text.to_lowercase().chars() {
		if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
			if pending_separator && !slug.is_empty() {
				slug.push('-');
			}
			pending_separator = false;
			slug.push(ch);
		} else {
			pending_separator = true;
		}
	}

	slug
}
