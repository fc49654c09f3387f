pub mod currency;
pub mod words;

/// Target locale for spoken-word expansion. Digit-to-words conversion is
/// locale-specific; only Brazilian Portuguese is implemented today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
}

/// Rewrite monetary expressions (`R$10,50`, `3,25`) into their spoken-word
/// equivalent so the synthesis provider reads them naturally. Non-matching
/// text passes through untouched.
pub fn normalize(input: &str, locale: Locale) -> String {
    currency::expand(input, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        normalize(input, Locale::PtBr)
    }

    #[test]
    fn expands_whole_amount_without_centavos_clause() {
        let result = run("R$10,00");
        assert!(result.contains("dez reais"));
        assert!(!result.contains("centavos"));
    }

    #[test]
    fn expands_amount_with_centavos() {
        assert_eq!(run("R$10,50"), "dez reais e cinquenta centavos");
    }

    #[test]
    fn expands_bare_amount_without_currency_sign() {
        assert_eq!(run("10,50"), "dez reais e cinquenta centavos");
    }

    #[test]
    fn leaves_plain_text_unchanged() {
        assert_eq!(run("Bom dia, tudo bem?"), "Bom dia, tudo bem?");
    }

    #[test]
    fn expands_inside_a_sentence() {
        assert_eq!(
            run("O total ficou em R$2,25 hoje."),
            "O total ficou em dois reais e vinte e cinco centavos hoje."
        );
    }

    #[test]
    fn expands_multiple_amounts() {
        let result = run("De R$1,00 para R$3,50");
        assert_eq!(
            result,
            "De um real para três reais e cinquenta centavos"
        );
    }

    #[test]
    fn is_idempotent() {
        let once = run("Pague R$42,07 agora");
        let twice = run(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn handles_empty_input() {
        assert_eq!(run(""), "");
    }
}
