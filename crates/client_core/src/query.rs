use shared::domain::SearchFilter;
use url::form_urlencoded;

/// Builds the query string for a sparse product listing.
///
/// Keys appear in the fixed order `name`, `category`, `price`; blank values
/// are omitted entirely, and the result is empty when nothing is set. Values
/// are form-urlencoded so reserved characters survive the trip intact.
pub fn build_query(filter: &SearchFilter) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in [
        ("name", filter.name.as_str()),
        ("category", filter.category.as_str()),
        ("price", filter.price.as_str()),
    ] {
        if !value.is_empty() {
            query.append_pair(key, value);
        }
    }
    query.finish()
}
