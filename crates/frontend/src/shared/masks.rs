//! Input masks for Brazilian documents and phone numbers.
//!
//! Each mask takes whatever is currently in the input, keeps only the digits,
//! truncates at the document length and re-inserts the punctuation, so the
//! functions are safe to re-apply on every keystroke.

/// Digits of a masked string.
pub fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// CPF: 11 digits, `123.456.789-01`. Extra digits are dropped.
pub fn mask_cpf(value: &str) -> String {
    let d = digits(value);
    let d = &d[..d.len().min(11)];
    let mut out = String::with_capacity(14);
    for (i, c) in d.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// CNPJ: 14 digits, `12.345.678/9012-34`.
pub fn mask_cnpj(value: &str) -> String {
    let d = digits(value);
    let d = &d[..d.len().min(14)];
    let mut out = String::with_capacity(18);
    for (i, c) in d.chars().enumerate() {
        match i {
            2 | 5 => out.push('.'),
            8 => out.push('/'),
            12 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Phone: DDD + up to 9 digits, `(11) 98765-4321`.
pub fn mask_phone(value: &str) -> String {
    let d = digits(value);
    let d = &d[..d.len().min(11)];
    let mut out = String::with_capacity(15);
    for (i, c) in d.chars().enumerate() {
        match i {
            0 => out.push('('),
            2 => out.push_str(") "),
            7 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_full() {
        assert_eq!(mask_cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn test_cpf_truncates_extra_digits() {
        assert_eq!(mask_cpf("123456789012345"), "123.456.789-01");
    }

    #[test]
    fn test_cpf_partial_input() {
        assert_eq!(mask_cpf("123"), "123");
        assert_eq!(mask_cpf("1234"), "123.4");
        assert_eq!(mask_cpf("1234567890"), "123.456.789-0");
    }

    #[test]
    fn test_cpf_reapplying_is_stable() {
        let once = mask_cpf("12345678901");
        assert_eq!(mask_cpf(&once), once);
    }

    #[test]
    fn test_cnpj() {
        assert_eq!(mask_cnpj("12345678901234"), "12.345.678/9012-34");
        assert_eq!(mask_cnpj("12345678"), "12.345.678");
        assert_eq!(mask_cnpj("123456789012345678"), "12.345.678/9012-34");
    }

    #[test]
    fn test_phone() {
        assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(mask_phone("119876"), "(11) 9876");
        assert_eq!(mask_phone("1198765432199"), "(11) 98765-4321");
    }

    #[test]
    fn test_non_digit_input_is_ignored() {
        assert_eq!(mask_cpf("abc123.456x789-01"), "123.456.789-01");
        assert_eq!(digits("(11) 98765-4321"), "11987654321");
    }
}
