use crate::checkers::parse_port;
use crate::compat::String;
use crate::error::UrlError;
use crate::types::Sections;
use crate::url_components::UrlComponents;

impl UrlComponents {
    /// Set `[userinfo@]host[:port]`.
    ///
    /// `None` removes the authority; `Some("")` leaves an empty host, as in
    /// `file:///path`.
    pub fn set_authority(&mut self, authority: Option<&str>) {
        self.errors.remove(Sections::AUTHORITY);
        self.user_name = None;
        self.password = None;
        self.port = None;

        let Some(authority) = authority else {
            self.host = None;
            return;
        };
        self.host = Some(String::new());
        if authority.is_empty() {
            return;
        }

        let bytes = authority.as_bytes();
        let mut host_start = 0;
        if let Some(at) = memchr::memchr(b'@', bytes) {
            self.set_user_info(Some(&authority[..at]));
            host_start = at + 1;
        }

        // the last colon delimits the port unless it sits inside "[...]"
        let mut port_colon = memchr::memrchr(b':', &bytes[host_start..]).map(|pos| host_start + pos);
        if let Some(colon) = port_colon
            && bytes.get(host_start) == Some(&b'[')
        {
            let closing = memchr::memchr(b']', &bytes[host_start..]).map(|pos| host_start + pos);
            if closing.is_none_or(|closing| closing > colon) {
                port_colon = None;
            }
        }

        if let Some(colon) = port_colon {
            match parse_port(&authority[colon + 1..]) {
                Ok(port) => self.port = Some(port),
                Err(code) => self.record_error(UrlError::new(code, None)),
            }
        }

        let host_end = port_colon.unwrap_or(authority.len());
        self.set_host(Some(&authority[host_start..host_end]));
    }
}
