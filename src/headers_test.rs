use super::*;

mod header_collection {
    use super::*;

    #[test]
    fn when_headers_pushed_should_preserve_staging_order() {
        // Arrange
        let mut collection = HeaderCollection::with_estimate(3);

        // Act
        collection.push("Access-Control-Allow-Methods", "GET".to_string());
        collection.push("Access-Control-Allow-Headers", "X-A".to_string());
        collection.push("Access-Control-Allow-Origin", "*".to_string());
        let headers = collection.into_headers();

        // Assert
        let names: Vec<&str> = headers.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            [
                "Access-Control-Allow-Methods",
                "Access-Control-Allow-Headers",
                "Access-Control-Allow-Origin",
            ]
        );
    }

    #[test]
    fn when_same_header_pushed_twice_should_keep_last_value() {
        // Arrange
        let mut collection = HeaderCollection::with_estimate(1);

        // Act
        collection.push("Access-Control-Max-Age", "60".to_string());
        collection.push("Access-Control-Max-Age", "600".to_string());
        let headers = collection.into_headers();

        // Assert
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("Access-Control-Max-Age").map(String::as_str),
            Some("600")
        );
    }
}
