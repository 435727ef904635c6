use uriel::{FormattingOptions, ParsingMode, Url};

fn main() {
    // Parse a URL; problems are recorded, never fatal
    let url = Url::parse(
        "https://user:pw@bücher.de:8080/a b/./c?query=value#hash",
        ParsingMode::Tolerant,
    );

    println!("Valid: {}", url.is_valid()); // true
    println!("Display: {url}"); // https://user@bücher.de:8080/a b/./c?query=value#hash
    println!("Encoded: {}", url.to_encoded()); // https://user:pw@xn--bcher-kva.de:8080/a%20b/./c?query=value#hash
    println!("Scheme: {:?}", url.scheme()); // Some("https")
    println!("Host: {:?}", url.host()); // Some("bücher.de")
    println!("Port: {:?}", url.port()); // Some(8080)
    println!("Path: {}", url.path()); // /a b/./c

    // Resolve a reference against it
    let target = url.resolved(&Url::parse("../d?x", ParsingMode::Tolerant));
    println!("Resolved: {target}"); // https://user@bücher.de:8080/d?x

    // Strict parsing reports the first offending character
    let strict = Url::parse("http://example.com/a b", ParsingMode::Strict);
    println!("Strict error: {}", strict.error_string()); // Invalid path (character ' ' not permitted)

    println!(
        "Without query: {}",
        url.to_string_with(FormattingOptions::REMOVE_QUERY | FormattingOptions::REMOVE_PASSWORD)
    );
}
