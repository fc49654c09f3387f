//! Cardinal number spelling for the locales the normalizer supports.

use super::Locale;

const UNITS: [&str; 20] = [
    "zero",
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "catorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Spell a cardinal number in the given locale. Supports 0..=999_999_999,
/// well past any monetary amount the normalizer will meet.
pub fn spell(n: u64, locale: Locale) -> String {
    match locale {
        Locale::PtBr => spell_pt_br(n),
    }
}

fn spell_pt_br(n: u64) -> String {
    if n >= 1_000_000 {
        let millions = n / 1_000_000;
        let rest = n % 1_000_000;
        let head = if millions == 1 {
            "um milhão".to_string()
        } else {
            format!("{} milhões", spell_pt_br(millions))
        };
        return join_group(head, rest);
    }

    if n >= 1000 {
        let thousands = n / 1000;
        let rest = n % 1000;
        // "mil", never "um mil"
        let head = if thousands == 1 {
            "mil".to_string()
        } else {
            format!("{} mil", spell_pt_br(thousands))
        };
        return join_group(head, rest);
    }

    spell_under_thousand(n)
}

fn spell_under_thousand(n: u64) -> String {
    if n < 20 {
        return UNITS[n as usize].to_string();
    }

    if n < 100 {
        let tens = TENS[(n / 10) as usize];
        return match n % 10 {
            0 => tens.to_string(),
            unit => format!("{} e {}", tens, UNITS[unit as usize]),
        };
    }

    // "cem" stands alone, "cento" takes a remainder
    if n == 100 {
        return "cem".to_string();
    }

    let hundreds = HUNDREDS[(n / 100) as usize];
    match n % 100 {
        0 => hundreds.to_string(),
        rest => format!("{} e {}", hundreds, spell_under_thousand(rest)),
    }
}

// Portuguese inserts "e" before a final group under one hundred or an
// exact hundred: "mil e quinhentos" but "mil duzentos e trinta e quatro".
fn join_group(head: String, rest: u64) -> String {
    if rest == 0 {
        head
    } else if rest < 100 || (rest < 1000 && rest % 100 == 0) {
        format!("{} e {}", head, spell_pt_br(rest))
    } else {
        format!("{} {}", head, spell_pt_br(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(n: u64) -> String {
        spell(n, Locale::PtBr)
    }

    #[test]
    fn spells_units_and_teens() {
        assert_eq!(pt(0), "zero");
        assert_eq!(pt(1), "um");
        assert_eq!(pt(15), "quinze");
        assert_eq!(pt(19), "dezenove");
    }

    #[test]
    fn spells_tens_with_connector() {
        assert_eq!(pt(20), "vinte");
        assert_eq!(pt(21), "vinte e um");
        assert_eq!(pt(99), "noventa e nove");
    }

    #[test]
    fn spells_one_hundred_as_cem() {
        assert_eq!(pt(100), "cem");
        assert_eq!(pt(101), "cento e um");
        assert_eq!(pt(110), "cento e dez");
    }

    #[test]
    fn spells_hundreds() {
        assert_eq!(pt(200), "duzentos");
        assert_eq!(pt(555), "quinhentos e cinquenta e cinco");
        assert_eq!(pt(999), "novecentos e noventa e nove");
    }

    #[test]
    fn spells_thousands() {
        assert_eq!(pt(1000), "mil");
        assert_eq!(pt(1500), "mil e quinhentos");
        assert_eq!(pt(1234), "mil duzentos e trinta e quatro");
        assert_eq!(pt(2000), "dois mil");
        assert_eq!(pt(2024), "dois mil e vinte e quatro");
    }

    #[test]
    fn spells_millions() {
        assert_eq!(pt(1_000_000), "um milhão");
        assert_eq!(pt(2_000_000), "dois milhões");
        assert_eq!(pt(1_000_300), "um milhão e trezentos");
        assert_eq!(
            pt(3_450_000),
            "três milhões quatrocentos e cinquenta mil"
        );
    }
}
