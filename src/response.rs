//! [`Responses`] and [`Response`] of an operation.

use indexmap::IndexMap;

use crate::{Content, Error, Extensions, Header, Link, RefOr, Result};

builder! {
    ResponsesBuilder;

    /// All possible responses of an operation, keyed by HTTP status code
    /// plus one optional `default` entry.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Responses {
        /// Response used for any status code not matched explicitly.
        pub default: Option<RefOr<Response>>,

        /// Responses keyed by status code, in document order.
        pub codes: IndexMap<String, RefOr<Response>>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Responses {
    crate::new!(pub Responses);

    /// Whether neither a default response nor any status code is present.
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.codes.is_empty()
    }

    /// Add a response for a status code, failing when the code is already
    /// present.
    pub fn add_response<C: Into<String>, R: Into<RefOr<Response>>>(
        &mut self,
        code: C,
        response: R,
    ) -> Result<()> {
        let code = code.into();
        if self.codes.contains_key(&code) {
            return Err(Error::Duplicate {
                kind: "response for code",
                key: code,
            });
        }
        self.codes.insert(code, response.into());
        Ok(())
    }

    /// Remove the response for a status code.
    pub fn remove_response(&mut self, code: &str) -> Option<RefOr<Response>> {
        self.codes.shift_remove(code)
    }

    /// Remove all responses, including the default one.
    pub fn clear_responses(&mut self) {
        self.default = None;
        self.codes.clear();
    }
}

impl ResponsesBuilder {
    /// Set the default response.
    pub fn default_response<R: Into<RefOr<Response>>>(mut self, response: R) -> Self {
        set_value!(self default Some(response.into()))
    }

    /// Add a response for a status code, replacing any existing entry.
    pub fn response<C: Into<String>, R: Into<RefOr<Response>>>(
        mut self,
        code: C,
        response: R,
    ) -> Self {
        self.codes.insert(code.into(), response.into());
        self
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

builder! {
    ResponseBuilder;

    /// A single response of an operation.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Response {
        /// Description of the response. Required by the format.
        pub description: String,

        /// Response headers, keyed by lowercased header name.
        pub headers: IndexMap<String, RefOr<Header>>,

        /// Payload descriptions keyed by media type.
        pub content: IndexMap<String, Content>,

        /// Links to related operations.
        pub links: IndexMap<String, RefOr<Link>>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Response {
    /// Construct a new [`Response`] with the given description.
    pub fn new<S: Into<String>>(description: S) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Add a header, failing when a case-insensitively equal name exists.
    ///
    /// Header names are stored lowercased, matching the reader.
    pub fn add_header<N: Into<String>, H: Into<RefOr<Header>>>(
        &mut self,
        name: N,
        header: H,
    ) -> Result<()> {
        let name = name.into().to_lowercase();
        if self.headers.contains_key(&name) {
            return Err(Error::DuplicateResponseHeader(name));
        }
        self.headers.insert(name, header.into());
        Ok(())
    }
}

impl ResponseBuilder {
    /// Set the description of the response.
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        set_value!(self description description.into())
    }

    /// Add a header; the name is lowercased and any existing entry is
    /// replaced.
    pub fn header<N: Into<String>, H: Into<RefOr<Header>>>(mut self, name: N, header: H) -> Self {
        self.headers.insert(name.into().to_lowercase(), header.into());
        self
    }

    /// Add a payload description for a media type.
    pub fn content<S: Into<String>>(mut self, media_type: S, content: Content) -> Self {
        self.content.insert(media_type.into(), content);
        self
    }

    /// Add a link to a related operation.
    pub fn link<N: Into<String>, L: Into<RefOr<Link>>>(mut self, name: N, link: L) -> Self {
        self.links.insert(name.into(), link.into());
        self
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_response_rejects_duplicate_code() {
        let mut responses = Responses::new();
        responses
            .add_response("200", Response::new("ok"))
            .unwrap();

        let err = responses
            .add_response("200", Response::new("ok again"))
            .unwrap_err();
        assert!(matches!(err, Error::Duplicate { key, .. } if key == "200"));
        assert_eq!(responses.codes.len(), 1);
    }

    #[test]
    fn add_header_is_case_insensitive() {
        let mut response = Response::new("ok");
        response.add_header("X-Request-Id", Header::new()).unwrap();

        let err = response
            .add_header("x-request-id", Header::new())
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateResponseHeader(_)));
        assert!(response.headers.contains_key("x-request-id"));
    }
}
