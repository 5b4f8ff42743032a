//! Shareable ticket links.
//!
//! A link is the board URL with the ticket id carried in the fragment:
//! `https://tickets.local/board#ticket=TCK-1042`. The fragment is encoded
//! and parsed like a query string, so extra `&`-separated pairs are
//! tolerated and the id survives url-encoding.

use url::Url;
use url::form_urlencoded;

use crate::error::{Result, TckError};

/// Build the shareable link for a ticket id.
pub fn ticket_link(board_url: &str, id: &str) -> Result<String> {
    let mut url = Url::parse(board_url)
        .map_err(|e| TckError::Config(format!("invalid board URL '{board_url}': {e}")))?;

    let fragment: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("ticket", id)
        .finish();
    url.set_fragment(Some(&fragment));

    Ok(url.to_string())
}

/// Extract the ticket id from a link's `ticket=<id>` fragment pair.
pub fn parse_ticket_link(link: &str) -> Result<String> {
    let url = Url::parse(link).map_err(|_| TckError::InvalidLink(link.to_string()))?;
    let fragment = url.fragment().unwrap_or("");

    for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
        if key == "ticket" && !value.is_empty() {
            return Ok(value.into_owned());
        }
    }

    Err(TckError::InvalidLink(link.to_string()))
}
