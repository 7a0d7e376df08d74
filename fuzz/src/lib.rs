use arbitrary::Arbitrary;
use sonic_atoi::{leading_zero_count_u64, parse_u64_checked, parse_u64_unchecked, ParseError};

/// Digits with some noise mixed in, so most inputs get past the length check.
#[derive(Debug, Arbitrary)]
pub struct DigitsInput {
    pub digits: Vec<u8>,
    pub noise: Option<(u8, u8)>,
}

impl DigitsInput {
    pub fn bytes(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self
            .digits
            .iter()
            .take(24)
            .map(|b| b'0' + b % 10)
            .collect();
        if let Some((pos, byte)) = self.noise {
            if !out.is_empty() {
                let len = out.len();
                out[pos as usize % len] = byte;
            }
        }
        out
    }
}

pub fn sonic_atoi_fuzz(data: &[u8]) {
    let got = parse_u64_checked(data);
    let is_digits = !data.is_empty() && data.iter().all(u8::is_ascii_digit);
    match std::str::from_utf8(data).ok().filter(|_| is_digits) {
        Some(text) if data.len() <= 20 => match text.parse::<u64>() {
            Ok(v) => {
                assert_eq!(got, Ok(v), "input {:?}", text);
                assert_eq!(unsafe { parse_u64_unchecked(data) }, v);
            }
            Err(_) => assert_eq!(got, Err(ParseError::Overflow), "input {:?}", text),
        },
        _ => {
            let err = got.expect_err("non digit input must fail");
            match err {
                ParseError::EmptyInput => assert!(data.is_empty()),
                ParseError::LengthOutOfRange { len } => assert_eq!(len, data.len()),
                ParseError::InvalidDigit { index, byte } => {
                    assert_eq!(data[index], byte);
                    assert!(!byte.is_ascii_digit());
                    assert!(data[..index].iter().all(u8::is_ascii_digit));
                }
                other => panic!("unexpected {other:?} for {data:?}"),
            }
        }
    }
}

pub fn clz_fuzz(x: u64) {
    assert_eq!(leading_zero_count_u64(x), x.leading_zeros());
}
