use std::io::BufRead;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SampleError {
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("'{0}' is not a finite value")]
    NonFinite(String),
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

#[derive(thiserror::Error, Debug)]
pub enum ReaderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Sample {
        line: usize,
        #[source]
        source: SampleError,
    },
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Parses one text frame: values separated by commas and/or whitespace,
/// value `i` going to line `i`.
///
/// Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_frame(text: &str) -> Result<Option<Vec<f64>>, SampleError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    let values = text
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let value: f64 = token
                .parse()
                .map_err(|_| SampleError::InvalidNumber(token.to_string()))?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(SampleError::NonFinite(token.to_string()))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((!values.is_empty()).then_some(values))
}

/// Iterates the frames of a line-oriented text source, skipping blank and
/// comment lines.
pub struct FrameReader<R> {
    reader: R,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = Result<Vec<f64>, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(err.into())),
            }
            self.line += 1;
            let parsed = std::str::from_utf8(&self.buf)
                .map_err(|_| SampleError::InvalidUtf8)
                .and_then(parse_frame);
            match parsed {
                Ok(Some(values)) => return Some(Ok(values)),
                Ok(None) => continue,
                Err(source) => {
                    return Some(Err(ReaderError::Sample {
                        line: self.line,
                        source,
                    }))
                }
            }
        }
    }
}
