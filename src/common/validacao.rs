use std::sync::LazyLock;

use regex::Regex;

// Formatos brasileiros usados nos payloads de entrada. Compartilhados entre
// os handlers via `#[validate(regex(path = *...))]`.

/// Telefone com DDD, parênteses e hífen opcionais. Ex: (41) 99999-1234
pub static TELEFONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(?\d{2}\)?\s?\d{4,5}-?\d{4}$").unwrap());

/// CEP no formato XXXXX-XXX ou XXXXXXXX.
pub static CEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}-?\d{3}$").unwrap());

/// CNPJ no formato XX.XXX.XXX/XXXX-XX.
pub static CNPJ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telefone_aceita_formatos_comuns() {
        assert!(TELEFONE_RE.is_match("(41) 99999-1234"));
        assert!(TELEFONE_RE.is_match("4133334444"));
        assert!(TELEFONE_RE.is_match("41 99999-1234"));
        assert!(!TELEFONE_RE.is_match("999-1234"));
        assert!(!TELEFONE_RE.is_match("telefone"));
    }

    #[test]
    fn cep_com_e_sem_hifen() {
        assert!(CEP_RE.is_match("80000-100"));
        assert!(CEP_RE.is_match("80000100"));
        assert!(!CEP_RE.is_match("80000-10"));
        assert!(!CEP_RE.is_match("8000-0100"));
    }

    #[test]
    fn cnpj_exige_mascara_completa() {
        assert!(CNPJ_RE.is_match("12.345.678/0001-90"));
        assert!(!CNPJ_RE.is_match("12345678000190"));
        assert!(!CNPJ_RE.is_match("12.345.678/0001"));
    }
}
