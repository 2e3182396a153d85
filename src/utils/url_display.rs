use url::Url;

const MAX_HOST: usize = 25;
const MAX_PATH: usize = 15;
const MAX_RAW: usize = 30;

fn truncate(text: &str, keep: usize) -> String {
    let mut short: String = text.chars().take(keep).collect();
    short.push_str("...");
    short
}

/// Compact label for an article link: `host/path`, both trimmed.
/// Anything that is not an absolute URL is just cut to length.
pub fn shorten_url(raw: &str) -> String {
    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => {
            return if raw.chars().count() > MAX_RAW {
                truncate(raw, MAX_RAW - 3)
            } else {
                raw.to_string()
            };
        }
    };

    let host = parsed.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    let mut label = if host.chars().count() > MAX_HOST {
        truncate(host, MAX_HOST - 3)
    } else {
        host.to_string()
    };

    let path = parsed.path();
    if path.chars().count() > 1 {
        if path.chars().count() > MAX_PATH {
            label.push_str(&truncate(path, MAX_PATH - 3));
        } else {
            label.push_str(path);
        }
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_www_and_keeps_short_path() {
        assert_eq!(shorten_url("https://www.bbc.com/news"), "bbc.com/news");
    }

    #[test]
    fn test_root_path_is_dropped() {
        assert_eq!(shorten_url("https://aljazeera.net/"), "aljazeera.net");
    }

    #[test]
    fn test_long_path_is_truncated() {
        assert_eq!(
            shorten_url("https://example.com/world/middle-east/story-123"),
            "example.com/world/middl..."
        );
    }

    #[test]
    fn test_long_host_is_truncated() {
        assert_eq!(
            shorten_url("https://news.some-very-long-publisher-name.example/"),
            "news.some-very-long-pu..."
        );
    }

    #[test]
    fn test_invalid_url_is_cut_to_length() {
        assert_eq!(shorten_url("not a url"), "not a url");
        let long = "this is definitely not a valid url at all";
        assert_eq!(shorten_url(long), "this is definitely not a va...");
    }
}
