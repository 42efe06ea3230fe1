//! Serialized string → value.
//!
//! Decodes the subset [`super::serialize`] produces. Object tokens (`O`,
//! `C`) and references (`r`, `R`) are rejected rather than interpreted.

use customizer_common::DecodeError;
use serde_json::{Map, Number, Value};

/// Deepest array nesting accepted, matching serde_json's recursion limit.
pub const MAX_DEPTH: usize = 128;

/// Decode a complete serialized string. Surrounding whitespace is ignored.
pub fn unserialize(data: &str) -> Result<Value, DecodeError> {
    let trimmed = data.trim();
    let mut reader = Reader {
        bytes: trimmed.as_bytes(),
        pos: 0,
        depth: 0,
    };
    let value = reader.value()?;
    if reader.pos != reader.bytes.len() {
        return Err(DecodeError::TrailingData(reader.pos));
    }
    Ok(value)
}

/// A decoded array key.
enum Key {
    Int(i64),
    Str(String),
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Reader<'a> {
    fn value(&mut self) -> Result<Value, DecodeError> {
        let token = self.next()?;
        match token {
            b'N' => {
                self.expect(b';', "';'")?;
                Ok(Value::Null)
            }
            b'b' => {
                self.expect(b':', "':'")?;
                let raw = self.until(b';')?;
                match raw {
                    "0" => Ok(Value::Bool(false)),
                    "1" => Ok(Value::Bool(true)),
                    other => Err(DecodeError::InvalidNumber(other.to_string())),
                }
            }
            b'i' => {
                self.expect(b':', "':'")?;
                Ok(Value::from(self.int_until(b';')?))
            }
            b'd' => {
                self.expect(b':', "':'")?;
                let raw = self.until(b';')?;
                raw.parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| DecodeError::InvalidNumber(raw.to_string()))
            }
            b's' => Ok(Value::String(self.string_body()?)),
            b'a' => self.array(),
            other => Err(DecodeError::UnsupportedToken(char::from(other))),
        }
    }

    /// `:<len>:"<bytes>";` after an `s` token.
    fn string_body(&mut self) -> Result<String, DecodeError> {
        self.expect(b':', "':'")?;
        let len = self.len_until(b':')?;
        self.expect(b'"', "'\"'")?;
        let start = self.pos;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(DecodeError::UnexpectedEnd(self.bytes.len()))?;
        let s = std::str::from_utf8(&self.bytes[start..end])
            .map_err(|_| DecodeError::InvalidUtf8(start))?
            .to_string();
        self.pos = end;
        self.expect(b'"', "'\"'")?;
        self.expect(b';', "';'")?;
        Ok(s)
    }

    fn array(&mut self) -> Result<Value, DecodeError> {
        if self.depth >= MAX_DEPTH {
            return Err(DecodeError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let value = self.array_body();
        self.depth -= 1;
        value
    }

    fn array_body(&mut self) -> Result<Value, DecodeError> {
        self.expect(b':', "':'")?;
        let count = self.len_until(b':')?;
        self.expect(b'{', "'{'")?;

        let mut entries = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            let key = self.key()?;
            let value = self.value()?;
            entries.push((key, value));
        }
        self.expect(b'}', "'}'")?;

        let is_list = entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| matches!(k, Key::Int(n) if usize::try_from(*n) == Ok(i)));
        if is_list {
            return Ok(Value::Array(entries.into_iter().map(|(_, v)| v).collect()));
        }

        let mut map = Map::new();
        for (key, value) in entries {
            let key = match key {
                Key::Int(n) => n.to_string(),
                Key::Str(s) => s,
            };
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }

    fn key(&mut self) -> Result<Key, DecodeError> {
        let offset = self.pos;
        match self.next()? {
            b'i' => {
                self.expect(b':', "':'")?;
                Ok(Key::Int(self.int_until(b';')?))
            }
            b's' => Ok(Key::Str(self.string_body()?)),
            other => Err(DecodeError::UnexpectedByte {
                offset,
                found: char::from(other),
                expected: "an 'i' or 's' key",
            }),
        }
    }

    fn next(&mut self) -> Result<u8, DecodeError> {
        let b = *self
            .bytes
            .get(self.pos)
            .ok_or(DecodeError::UnexpectedEnd(self.pos))?;
        self.pos += 1;
        Ok(b)
    }

    fn expect(&mut self, want: u8, expected: &'static str) -> Result<(), DecodeError> {
        let offset = self.pos;
        let found = self.next()?;
        if found == want {
            Ok(())
        } else {
            Err(DecodeError::UnexpectedByte {
                offset,
                found: char::from(found),
                expected,
            })
        }
    }

    /// Text up to (not including) `end`; consumes `end`.
    fn until(&mut self, end: u8) -> Result<&'a str, DecodeError> {
        let bytes = self.bytes;
        let start = self.pos;
        let rel = bytes[start..]
            .iter()
            .position(|&b| b == end)
            .ok_or(DecodeError::UnexpectedEnd(bytes.len()))?;
        self.pos = start + rel + 1;
        std::str::from_utf8(&bytes[start..start + rel]).map_err(|_| DecodeError::InvalidUtf8(start))
    }

    fn int_until(&mut self, end: u8) -> Result<i64, DecodeError> {
        let raw = self.until(end)?;
        raw.parse()
            .map_err(|_| DecodeError::InvalidNumber(raw.to_string()))
    }

    fn len_until(&mut self, end: u8) -> Result<usize, DecodeError> {
        let raw = self.until(end)?;
        raw.parse()
            .map_err(|_| DecodeError::InvalidNumber(raw.to_string()))
    }
}
