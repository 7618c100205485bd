//! Fixed reference dataset of named color samples.
//!
//! Data only. Swapping or extending this table must not change the matching
//! algorithm; ties during ranking are broken by the order below.

use super::{ColorSample, Finish};

pub const COLOR_SAMPLES: &[ColorSample] = &[
    // Coated guide
    ColorSample { code: "Yellow", hex: "#FEDD00", finish: Finish::Coated },
    ColorSample { code: "Yellow 012", hex: "#FFD700", finish: Finish::Coated },
    ColorSample { code: "Orange 021", hex: "#FE5000", finish: Finish::Coated },
    ColorSample { code: "Warm Red", hex: "#F9423A", finish: Finish::Coated },
    ColorSample { code: "Red 032", hex: "#EF3340", finish: Finish::Coated },
    ColorSample { code: "Rubine Red", hex: "#CE0058", finish: Finish::Coated },
    ColorSample { code: "Rhodamine Red", hex: "#E10098", finish: Finish::Coated },
    ColorSample { code: "Purple", hex: "#BB29BB", finish: Finish::Coated },
    ColorSample { code: "Violet", hex: "#440099", finish: Finish::Coated },
    ColorSample { code: "Blue 072", hex: "#10069F", finish: Finish::Coated },
    ColorSample { code: "Reflex Blue", hex: "#001489", finish: Finish::Coated },
    ColorSample { code: "Process Blue", hex: "#0085CA", finish: Finish::Coated },
    ColorSample { code: "Green", hex: "#00AB84", finish: Finish::Coated },
    ColorSample { code: "Black", hex: "#2D2926", finish: Finish::Coated },
    ColorSample { code: "100", hex: "#F6EB61", finish: Finish::Coated },
    ColorSample { code: "116", hex: "#FFCD00", finish: Finish::Coated },
    ColorSample { code: "123", hex: "#FFC72C", finish: Finish::Coated },
    ColorSample { code: "151", hex: "#FF8200", finish: Finish::Coated },
    ColorSample { code: "165", hex: "#FF6720", finish: Finish::Coated },
    ColorSample { code: "185", hex: "#E4002B", finish: Finish::Coated },
    ColorSample { code: "186", hex: "#C8102E", finish: Finish::Coated },
    ColorSample { code: "199", hex: "#D50032", finish: Finish::Coated },
    ColorSample { code: "212", hex: "#F04E98", finish: Finish::Coated },
    ColorSample { code: "219", hex: "#DA1884", finish: Finish::Coated },
    ColorSample { code: "2685", hex: "#330072", finish: Finish::Coated },
    ColorSample { code: "2725", hex: "#685BC7", finish: Finish::Coated },
    ColorSample { code: "286", hex: "#0033A0", finish: Finish::Coated },
    ColorSample { code: "293", hex: "#003DA5", finish: Finish::Coated },
    ColorSample { code: "300", hex: "#005EB8", finish: Finish::Coated },
    ColorSample { code: "306", hex: "#00B5E2", finish: Finish::Coated },
    ColorSample { code: "320", hex: "#009CA6", finish: Finish::Coated },
    ColorSample { code: "347", hex: "#009A44", finish: Finish::Coated },
    ColorSample { code: "354", hex: "#00B140", finish: Finish::Coated },
    ColorSample { code: "376", hex: "#84BD00", finish: Finish::Coated },
    ColorSample { code: "382", hex: "#C4D600", finish: Finish::Coated },
    ColorSample { code: "484", hex: "#9A3324", finish: Finish::Coated },
    ColorSample { code: "485", hex: "#DA291C", finish: Finish::Coated },
    ColorSample { code: "7408", hex: "#F0B323", finish: Finish::Coated },
    ColorSample { code: "7461", hex: "#007DBA", finish: Finish::Coated },
    ColorSample { code: "7545", hex: "#425563", finish: Finish::Coated },
    ColorSample { code: "871", hex: "#84754E", finish: Finish::Coated },
    ColorSample { code: "Cool Gray 1", hex: "#D9D9D6", finish: Finish::Coated },
    ColorSample { code: "Cool Gray 6", hex: "#A7A8AA", finish: Finish::Coated },
    ColorSample { code: "Cool Gray 11", hex: "#53565A", finish: Finish::Coated },
    ColorSample { code: "Warm Gray 1", hex: "#D7D2CB", finish: Finish::Coated },

    // Uncoated guide
    ColorSample { code: "Yellow", hex: "#FFE800", finish: Finish::Uncoated },
    ColorSample { code: "Yellow 012", hex: "#FFDF00", finish: Finish::Uncoated },
    ColorSample { code: "Orange 021", hex: "#FF6A39", finish: Finish::Uncoated },
    ColorSample { code: "Warm Red", hex: "#FF6057", finish: Finish::Uncoated },
    ColorSample { code: "Red 032", hex: "#F65058", finish: Finish::Uncoated },
    ColorSample { code: "Rubine Red", hex: "#E0457B", finish: Finish::Uncoated },
    ColorSample { code: "Rhodamine Red", hex: "#EA27C2", finish: Finish::Uncoated },
    ColorSample { code: "Purple", hex: "#CA3CCA", finish: Finish::Uncoated },
    ColorSample { code: "Violet", hex: "#5F37A0", finish: Finish::Uncoated },
    ColorSample { code: "Blue 072", hex: "#3B3EAC", finish: Finish::Uncoated },
    ColorSample { code: "Reflex Blue", hex: "#323E95", finish: Finish::Uncoated },
    ColorSample { code: "Process Blue", hex: "#0093D0", finish: Finish::Uncoated },
    ColorSample { code: "Green", hex: "#00B28A", finish: Finish::Uncoated },
    ColorSample { code: "Black", hex: "#3F3A36", finish: Finish::Uncoated },
    ColorSample { code: "100", hex: "#FAF09A", finish: Finish::Uncoated },
    ColorSample { code: "116", hex: "#FFD226", finish: Finish::Uncoated },
    ColorSample { code: "123", hex: "#FFCB4F", finish: Finish::Uncoated },
    ColorSample { code: "151", hex: "#FF8F1C", finish: Finish::Uncoated },
    ColorSample { code: "165", hex: "#FF7433", finish: Finish::Uncoated },
    ColorSample { code: "185", hex: "#EA2839", finish: Finish::Uncoated },
    ColorSample { code: "186", hex: "#D22E44", finish: Finish::Uncoated },
    ColorSample { code: "199", hex: "#DB2B50", finish: Finish::Uncoated },
    ColorSample { code: "212", hex: "#F45FA2", finish: Finish::Uncoated },
    ColorSample { code: "219", hex: "#E0379B", finish: Finish::Uncoated },
    ColorSample { code: "2685", hex: "#4F2D8F", finish: Finish::Uncoated },
    ColorSample { code: "2725", hex: "#7267CA", finish: Finish::Uncoated },
    ColorSample { code: "286", hex: "#2E4BA0", finish: Finish::Uncoated },
    ColorSample { code: "293", hex: "#2B52A8", finish: Finish::Uncoated },
    ColorSample { code: "300", hex: "#2E6FB7", finish: Finish::Uncoated },
    ColorSample { code: "306", hex: "#27BCE1", finish: Finish::Uncoated },
    ColorSample { code: "320", hex: "#00A5AD", finish: Finish::Uncoated },
    ColorSample { code: "347", hex: "#00A551", finish: Finish::Uncoated },
    ColorSample { code: "354", hex: "#00B94E", finish: Finish::Uncoated },
    ColorSample { code: "376", hex: "#8DC21F", finish: Finish::Uncoated },
    ColorSample { code: "382", hex: "#C9DA2A", finish: Finish::Uncoated },
    ColorSample { code: "484", hex: "#A8473B", finish: Finish::Uncoated },
    ColorSample { code: "485", hex: "#E03C31", finish: Finish::Uncoated },
    ColorSample { code: "7408", hex: "#F4B826", finish: Finish::Uncoated },
    ColorSample { code: "7461", hex: "#2489C5", finish: Finish::Uncoated },
    ColorSample { code: "7545", hex: "#56616C", finish: Finish::Uncoated },
    ColorSample { code: "871", hex: "#8F7D53", finish: Finish::Uncoated },
    ColorSample { code: "Cool Gray 1", hex: "#DEDDDB", finish: Finish::Uncoated },
    ColorSample { code: "Cool Gray 6", hex: "#AFAFB1", finish: Finish::Uncoated },
    ColorSample { code: "Cool Gray 11", hex: "#66676C", finish: Finish::Uncoated },
    ColorSample { code: "Warm Gray 1", hex: "#DCD6CE", finish: Finish::Uncoated },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_hex_parses() {
        for sample in COLOR_SAMPLES {
            assert!(
                super::super::parse_hex(sample.hex).is_some(),
                "bad hex in dataset: {} {}",
                sample.code,
                sample.hex
            );
        }
    }

    #[test]
    fn both_finishes_are_populated() {
        assert!(COLOR_SAMPLES.iter().any(|s| s.finish == Finish::Coated));
        assert!(COLOR_SAMPLES.iter().any(|s| s.finish == Finish::Uncoated));
    }
}
