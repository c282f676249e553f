use crate::request::HttpRequest;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use url::Url;

/// `base64(user_id ":" phone_number)`, standard alphabet with padding.
pub fn basic_auth_token(user_id: &str, phone_number: &str) -> String {
    STANDARD.encode(format!("{user_id}:{phone_number}"))
}

pub fn build_records_request(endpoint: &Url, user_id: &str, phone_number: &str) -> HttpRequest {
    HttpRequest::get(endpoint.as_str())
        .with_header(
            "Authorization",
            format!("Basic {}", basic_auth_token(user_id, phone_number)),
        )
        .with_header("Accept", "text/csv, text/plain, */*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_standard_base64_of_user_and_phone() {
        assert_eq!(basic_auth_token("u1", "0900000001"), "dTE6MDkwMDAwMDAwMQ==");
        assert_eq!(basic_auth_token("", ""), "Og==");
    }

    #[test]
    fn builds_get_with_basic_authorization() {
        let url = Url::parse("https://records.example.com/members.csv").unwrap();
        let req = build_records_request(&url, "u1", "0900000001");
        assert_eq!(req.method, "GET");
        assert_eq!(req.url, "https://records.example.com/members.csv");
        assert_eq!(
            req.header("authorization"),
            Some("Basic dTE6MDkwMDAwMDAwMQ==")
        );
    }
}
