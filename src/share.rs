//! Share-intent URL builders for the article page.
//!
//! Plain links into the networks' share endpoints — no SDK scripts, no
//! tracking. Query strings are built with `form_urlencoded` so titles with
//! quotes and unicode survive intact.

use url::form_urlencoded::Serializer;

/// Tweet-composer URL pre-filled with the article link and a blurb.
pub fn twitter(post_url: &str, title: &str, author: &str) -> String {
    let text = format!("Check out this article: \"{title}\" by {author}");
    let query = Serializer::new(String::new())
        .append_pair("url", post_url)
        .append_pair("text", &text)
        .finish();
    format!("https://twitter.com/intent/tweet?{query}")
}

/// LinkedIn share-offsite URL for the article link.
pub fn linkedin(post_url: &str) -> String {
    let query = Serializer::new(String::new())
        .append_pair("url", post_url)
        .finish();
    format!("https://www.linkedin.com/sharing/share-offsite/?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twitter_url_carries_link_and_blurb() {
        let url = twitter("https://blog.example.com/posts/a.html", "My Post", "Jo Doe");
        assert!(url.starts_with("https://twitter.com/intent/tweet?"));
        assert!(url.contains("url=https%3A%2F%2Fblog.example.com%2Fposts%2Fa.html"));
        assert!(url.contains("Check+out+this+article"));
        assert!(url.contains("Jo+Doe"));
    }

    #[test]
    fn twitter_escapes_quotes_in_title() {
        let url = twitter("https://e.com/p", "A \"quoted\" title", "A");
        assert!(url.contains("%22quoted%22"));
    }

    #[test]
    fn linkedin_url_carries_link() {
        let url = linkedin("https://blog.example.com/posts/a.html");
        assert!(url.starts_with("https://www.linkedin.com/sharing/share-offsite/?"));
        assert!(url.contains("url=https%3A%2F%2Fblog.example.com%2Fposts%2Fa.html"));
    }
}
