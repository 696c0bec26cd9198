//! Header parsing.
//!
//! A header is a sequence of 80-byte ASCII cards terminated by `END` and
//! padded to a multiple of 2880 bytes. Cards with a value indicator (`= ` in
//! columns 9-10) carry a value and an optional `/` comment.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::{char, digit1, one_of, space0},
    combinator::{map, opt, recognize, rest, value},
    multi::many0,
    sequence::{pair, preceded, tuple},
    IResult,
};
use sky_common::{ImageMetadata, WcsKeywords};

use crate::{FitsError, FitsResult, BLOCK_SIZE, CARD_SIZE};

/// A parsed card value.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Logical(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    /// Value field present but empty
    Undefined,
    /// Value of a kind this parser does not interpret (e.g. complex)
    Other(String),
}

/// One header card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub keyword: String,
    pub value: Option<HeaderValue>,
    pub comment: Option<String>,
}

/// Parsed primary header.
#[derive(Debug, Clone, Default)]
pub struct Header {
    cards: Vec<Card>,
}

// === Value grammar ===

fn quoted_string(input: &str) -> IResult<&str, HeaderValue> {
    let (input, _) = char('\'')(input)?;
    let (input, parts) = many0(alt((is_not("'"), value("'", tag("''")))))(input)?;
    let (input, _) = char('\'')(input)?;
    // Trailing blanks in a string value are not significant
    Ok((input, HeaderValue::Text(parts.concat().trim_end().to_string())))
}

fn logical(input: &str) -> IResult<&str, HeaderValue> {
    map(one_of("TF"), |c| HeaderValue::Logical(c == 'T'))(input)
}

fn number(input: &str) -> IResult<&str, HeaderValue> {
    let mantissa = alt((
        recognize(pair(digit1, opt(pair(char('.'), opt(digit1))))),
        recognize(pair(char('.'), digit1)),
    ));
    let exponent = tuple((one_of("EeDd"), opt(one_of("+-")), digit1));
    let (input, text) = recognize(tuple((opt(one_of("+-")), mantissa, opt(exponent))))(input)?;

    let is_real = text.contains(['.', 'E', 'e', 'D', 'd']);
    let parsed = if is_real {
        text.replace(['D', 'd'], "E").parse::<f64>().ok().map(HeaderValue::Real)
    } else {
        text.parse::<i64>()
            .ok()
            .map(HeaderValue::Integer)
            .or_else(|| text.parse::<f64>().ok().map(HeaderValue::Real))
    };

    match parsed {
        Some(v) => Ok((input, v)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Float,
        ))),
    }
}

fn comment(input: &str) -> IResult<&str, Option<&str>> {
    preceded(space0, opt(preceded(char('/'), rest)))(input)
}

/// Parse the value field (columns 11-80) of a card.
fn value_field(input: &str) -> IResult<&str, (HeaderValue, Option<&str>)> {
    let (input, _) = space0(input)?;
    if input.is_empty() {
        return Ok((input, (HeaderValue::Undefined, None)));
    }
    if let Some(c) = input.strip_prefix('/') {
        return Ok(("", (HeaderValue::Undefined, Some(c))));
    }

    match alt((quoted_string, logical, number))(input) {
        Ok((remaining, value)) => {
            let (remaining, comment) = comment(remaining)?;
            Ok((remaining, (value, comment)))
        }
        Err(_) => {
            let (raw, comment) = match input.split_once('/') {
                Some((raw, c)) => (raw, Some(c)),
                None => (input, None),
            };
            Ok(("", (HeaderValue::Other(raw.trim().to_string()), comment)))
        }
    }
}

/// Parse one 80-character card.
pub fn parse_card(card: &str) -> FitsResult<Card> {
    let keyword = card.get(..8).unwrap_or(card).trim_end().to_string();
    let has_value = card.get(8..10) == Some("= ")
        && !matches!(keyword.as_str(), "COMMENT" | "HISTORY" | "");

    if !has_value {
        let text = card.get(8..).map(str::trim_end).unwrap_or_default();
        return Ok(Card {
            keyword,
            value: None,
            comment: (!text.is_empty()).then(|| text.to_string()),
        });
    }

    let field = card.get(10..).unwrap_or_default();
    let (_, (value, comment)) = value_field(field)
        .map_err(|e| FitsError::InvalidHeader(format!("{}: {}", keyword, e)))?;

    Ok(Card {
        keyword,
        value: Some(value),
        comment: comment.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
    })
}

impl Header {
    /// Parse a header from the start of `bytes`.
    ///
    /// Returns the header and the number of bytes it occupies (a multiple of
    /// the block size), i.e. the offset of the data unit.
    pub fn parse(bytes: &[u8]) -> FitsResult<(Header, usize)> {
        if !bytes.starts_with(b"SIMPLE  =") {
            return Err(FitsError::NotFits(
                "stream does not start with a SIMPLE card".to_string(),
            ));
        }

        let mut cards = Vec::new();
        for (index, chunk) in bytes.chunks(CARD_SIZE).enumerate() {
            if chunk.len() < CARD_SIZE {
                break;
            }
            if !chunk.is_ascii() {
                return Err(FitsError::InvalidHeader(format!(
                    "card {} contains non-ASCII bytes",
                    index + 1
                )));
            }
            let text = String::from_utf8_lossy(chunk);
            let card = parse_card(&text)?;

            if card.keyword == "END" {
                let used = (index + 1) * CARD_SIZE;
                let length = used.div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
                return Ok((Header { cards }, length));
            }
            cards.push(card);
        }

        Err(FitsError::InvalidHeader("END card not found".to_string()))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Value of the first card with this keyword.
    pub fn get(&self, keyword: &str) -> Option<&HeaderValue> {
        self.cards
            .iter()
            .find(|c| c.keyword == keyword)
            .and_then(|c| c.value.as_ref())
    }

    pub fn get_int(&self, keyword: &str) -> Option<i64> {
        match self.get(keyword)? {
            HeaderValue::Integer(i) => Some(*i),
            HeaderValue::Real(r) if r.fract() == 0.0 => Some(*r as i64),
            _ => None,
        }
    }

    /// Numeric value; integers are widened.
    pub fn get_real(&self, keyword: &str) -> Option<f64> {
        match self.get(keyword)? {
            HeaderValue::Integer(i) => Some(*i as f64),
            HeaderValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn get_str(&self, keyword: &str) -> Option<&str> {
        match self.get(keyword)? {
            HeaderValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_bool(&self, keyword: &str) -> Option<bool> {
        match self.get(keyword)? {
            HeaderValue::Logical(b) => Some(*b),
            _ => None,
        }
    }

    pub fn require_int(&self, keyword: &'static str) -> FitsResult<i64> {
        self.get_int(keyword)
            .ok_or(FitsError::MissingKeyword(keyword))
    }

    /// Collect the WCS keywords of the first two axes.
    pub fn wcs_keywords(&self) -> WcsKeywords {
        let mut keywords = WcsKeywords::default();
        for i in 0..2 {
            let n = i + 1;
            keywords.ctype[i] = self
                .get_str(&format!("CTYPE{}", n))
                .map(str::to_string);
            keywords.crpix[i] = self.get_real(&format!("CRPIX{}", n));
            keywords.crval[i] = self.get_real(&format!("CRVAL{}", n));
            keywords.cdelt[i] = self.get_real(&format!("CDELT{}", n));
            for j in 0..2 {
                keywords.cd[i][j] = self.get_real(&format!("CD{}_{}", n, j + 1));
                keywords.pc[i][j] = self.get_real(&format!("PC{}_{}", n, j + 1));
            }
        }
        keywords.crota2 = self.get_real("CROTA2");
        keywords
    }

    /// Descriptive metadata for display.
    pub fn metadata(&self, source: &str) -> ImageMetadata {
        let text = |k: &str| {
            self.get_str(k)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        ImageMetadata {
            source: source.to_string(),
            object: text("OBJECT"),
            telescope: text("TELESCOP"),
            instrument: text("INSTRUME"),
            observed_at: self.get_str("DATE-OBS").and_then(parse_date_obs),
            unit: text("BUNIT"),
        }
    }
}

/// Parse a DATE-OBS value: `YYYY-MM-DD[Thh:mm:ss[.sss]]`, or the older
/// `DD/MM/YY` form (years 19YY).
pub fn parse_date_obs(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .or_else(|| {
            let mut parts = value.split('/');
            let day: u32 = parts.next()?.parse().ok()?;
            let month: u32 = parts.next()?.parse().ok()?;
            let year: i32 = parts.next()?.parse().ok()?;
            NaiveDate::from_ymd_opt(1900 + year, month, day)?.and_hms_opt(0, 0, 0)
        })?;
    Some(Utc.from_utc_datetime(&naive))
}
