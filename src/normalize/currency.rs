use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::{words, Locale};

lazy_static! {
    static ref MONEY_REGEX: Regex = Regex::new(
        r"(?x)
        (?:R\$\s?)?         # optional currency sign
        (\d+),(\d{2})\b     # integer part, comma, exactly two fraction digits
        "
    )
    .unwrap();
}

/// Expand every monetary match in `input` to its spoken form. The output
/// contains no digit patterns, so a second pass is a no-op.
pub fn expand(input: &str, locale: Locale) -> String {
    MONEY_REGEX
        .replace_all(input, |caps: &Captures| {
            let reais: u64 = match caps[1].parse() {
                Ok(n) => n,
                Err(_) => return caps[0].to_string(),
            };
            let centavos: u64 = match caps[2].parse() {
                Ok(n) => n,
                Err(_) => return caps[0].to_string(),
            };
            speak_amount(reais, centavos, locale)
        })
        .into_owned()
}

fn speak_amount(reais: u64, centavos: u64, locale: Locale) -> String {
    let reais_clause = match reais {
        0 => None,
        1 => Some("um real".to_string()),
        n => Some(format!("{} reais", words::spell(n, locale))),
    };

    let centavos_clause = match centavos {
        0 => None,
        1 => Some("um centavo".to_string()),
        n => Some(format!("{} centavos", words::spell(n, locale))),
    };

    match (reais_clause, centavos_clause) {
        (Some(r), Some(c)) => format!("{} e {}", r, c),
        (Some(r), None) => r,
        (None, Some(c)) => c,
        (None, None) => "zero reais".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        expand(input, Locale::PtBr)
    }

    #[test]
    fn expands_with_currency_sign() {
        assert_eq!(run("R$10,50"), "dez reais e cinquenta centavos");
    }

    #[test]
    fn expands_with_spaced_currency_sign() {
        assert_eq!(run("R$ 10,50"), "dez reais e cinquenta centavos");
    }

    #[test]
    fn drops_centavos_clause_for_whole_amounts() {
        assert_eq!(run("R$10,00"), "dez reais");
    }

    #[test]
    fn uses_singular_for_one_real_and_one_centavo() {
        assert_eq!(run("R$1,01"), "um real e um centavo");
    }

    #[test]
    fn speaks_centavos_only_when_integer_part_is_zero() {
        assert_eq!(run("R$0,50"), "cinquenta centavos");
    }

    #[test]
    fn zero_amount_still_speaks() {
        assert_eq!(run("R$0,00"), "zero reais");
    }

    #[test]
    fn ignores_fractions_that_are_not_two_digits() {
        assert_eq!(run("versão 1,5 do app"), "versão 1,5 do app");
        assert_eq!(run("pi é 3,141"), "pi é 3,141");
    }

    #[test]
    fn expands_large_amounts() {
        assert_eq!(
            run("R$1234,56"),
            "mil duzentos e trinta e quatro reais e cinquenta e seis centavos"
        );
    }

    #[test]
    fn leaves_unparseable_match_untouched() {
        // 25 digits overflow u64; the original text survives
        let input = "R$9999999999999999999999999,00";
        assert_eq!(run(input), input);
    }
}
