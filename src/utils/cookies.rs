use axum_extra::extract::cookie::Cookie;

/// Builds a cookie readable by the front end (not HttpOnly), scoped to the
/// whole site and expiring after `max_age_secs`.
pub fn client_cookie(name: String, value: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(false)
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_cookie_attributes() {
        let cookie = client_cookie("learn_live_JWT".to_string(), "abc".to_string(), 60);
        assert_eq!(cookie.name(), "learn_live_JWT");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(false));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(60)));
    }
}
