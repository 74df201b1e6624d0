// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversions between epoch milliseconds and the wire's RFC 3339 strings.
//!
//! The domain model stores creation timestamps as milliseconds since the Unix
//! epoch; the service exchanges them as RFC 3339 date-time strings. Both
//! directions are stateless free functions.

use crate::error::Error;
use time::format_description::well_known::Rfc3339;

const NANOS_PER_MILLI: i128 = 1_000_000;

const EXPECT_FORMAT_SUCCEEDS: &str = concat!(
    "formatting a creation timestamp using RFC 3339 should always succeed. ",
    "Stored timestamps only originate from parse_millis, so they are always in range. ",
    "If this is not the case, please file a bug at https://github.com/googleapis/google-cloud-rust/issues"
);

/// Renders epoch milliseconds as an RFC 3339 date-time string.
///
/// Stored timestamps are only ever produced by [parse_millis], so the value is
/// known to be representable and formatting cannot fail.
pub(crate) fn format_millis(millis: i64) -> String {
    let odt = time::OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * NANOS_PER_MILLI)
        .expect(EXPECT_FORMAT_SUCCEEDS);
    odt.format(&Rfc3339).expect(EXPECT_FORMAT_SUCCEEDS)
}

/// Parses an RFC 3339 date-time string into epoch milliseconds.
pub(crate) fn parse_millis(value: &str) -> Result<i64, Error> {
    let odt = time::OffsetDateTime::parse(value, &Rfc3339).map_err(|e| {
        Error::malformed_with_source(format!("cannot parse creation timestamp: {value}"), e)
    })?;
    Ok(odt.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLI) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1970-01-01T00:00:00Z", 0)]
    #[test_case("1970-01-01T00:00:00.123Z", 123)]
    #[test_case("2016-03-01T10:19:32.063Z", 1456827572063)]
    #[test_case("1969-12-31T23:59:59.999Z", -1)]
    #[test_case("1970-01-01T02:00:00+02:00", 0; "explicit offset")]
    fn parse(input: &str, want: i64) {
        assert_eq!(parse_millis(input).unwrap(), want);
    }

    #[test_case(0, "1970-01-01T00:00:00Z")]
    #[test_case(123, "1970-01-01T00:00:00.123Z")]
    #[test_case(1456827572063, "2016-03-01T10:19:32.063Z")]
    fn format(input: i64, want: &str) {
        assert_eq!(format_millis(input), want);
    }

    #[test_case(""; "empty")]
    #[test_case("not-a-timestamp")]
    #[test_case("2016-03-01"; "date only")]
    #[test_case("2016-03-01T10:19:32"; "missing offset")]
    fn parse_malformed(input: &str) {
        let err = parse_millis(input).unwrap_err();
        assert!(err.is_malformed_wire_data(), "{err}");
        assert!(std::error::Error::source(&err).is_some(), "{err:?}");
    }

    #[test]
    fn roundtrip() {
        let millis = parse_millis("2024-10-19T12:34:56.789Z").unwrap();
        assert_eq!(parse_millis(&format_millis(millis)).unwrap(), millis);
    }
}
