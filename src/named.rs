//! Named web colors as constants plus a name lookup table.

use once_cell::sync::Lazy;
use ordermap::OrderMap;

use crate::color::Color;

macro_rules! named_colors {
    ($($ident:ident = $name:literal, $argb:literal;)*) => {
        $(
            #[doc = concat!("The web color `", $name, "`.")]
            pub const $ident: Color = Color::from_argb($argb);
        )*

        static NAMED: Lazy<OrderMap<&'static str, Color>> = Lazy::new(|| {
            let mut map = OrderMap::new();
            $(map.insert($name, $ident);)*
            map
        });
    };
}

named_colors! {
    ALICE_BLUE = "aliceblue", 0xFFF0F8FF;
    ANTIQUE_WHITE = "antiquewhite", 0xFFFAEBD7;
    AQUA = "aqua", 0xFF00FFFF;
    AQUAMARINE = "aquamarine", 0xFF7FFFD4;
    AZURE = "azure", 0xFFF0FFFF;
    BEIGE = "beige", 0xFFF5F5DC;
    BISQUE = "bisque", 0xFFFFE4C4;
    BLACK = "black", 0xFF000000;
    BLANCHED_ALMOND = "blanchedalmond", 0xFFFFEBCD;
    BLUE = "blue", 0xFF0000FF;
    BLUE_VIOLET = "blueviolet", 0xFF8A2BE2;
    BROWN = "brown", 0xFFA52A2A;
    BURLY_WOOD = "burlywood", 0xFFDEB887;
    CADET_BLUE = "cadetblue", 0xFF5F9EA0;
    CHARTREUSE = "chartreuse", 0xFF7FFF00;
    CHOCOLATE = "chocolate", 0xFFD2691E;
    CORAL = "coral", 0xFFFF7F50;
    CORNFLOWER_BLUE = "cornflowerblue", 0xFF6495ED;
    CORNSILK = "cornsilk", 0xFFFFF8DC;
    CRIMSON = "crimson", 0xFFDC143C;
    CYAN = "cyan", 0xFF00FFFF;
    DARK_BLUE = "darkblue", 0xFF00008B;
    DARK_CYAN = "darkcyan", 0xFF008B8B;
    DARK_GOLDENROD = "darkgoldenrod", 0xFFB8860B;
    DARK_GRAY = "darkgray", 0xFFA9A9A9;
    DARK_GREEN = "darkgreen", 0xFF006400;
    DARK_KHAKI = "darkkhaki", 0xFFBDB76B;
    DARK_MAGENTA = "darkmagenta", 0xFF8B008B;
    DARK_OLIVE_GREEN = "darkolivegreen", 0xFF556B2F;
    DARK_ORANGE = "darkorange", 0xFFFF8C00;
    DARK_ORCHID = "darkorchid", 0xFF9932CC;
    DARK_RED = "darkred", 0xFF8B0000;
    DARK_SALMON = "darksalmon", 0xFFE9967A;
    DARK_SEA_GREEN = "darkseagreen", 0xFF8FBC8B;
    DARK_SLATE_BLUE = "darkslateblue", 0xFF483D8B;
    DARK_SLATE_GRAY = "darkslategray", 0xFF2F4F4F;
    DARK_TURQUOISE = "darkturquoise", 0xFF00CED1;
    DARK_VIOLET = "darkviolet", 0xFF9400D3;
    DEEP_PINK = "deeppink", 0xFFFF1493;
    DEEP_SKY_BLUE = "deepskyblue", 0xFF00BFFF;
    DIM_GRAY = "dimgray", 0xFF696969;
    DODGER_BLUE = "dodgerblue", 0xFF1E90FF;
    FIREBRICK = "firebrick", 0xFFB22222;
    FLORAL_WHITE = "floralwhite", 0xFFFFFAF0;
    FOREST_GREEN = "forestgreen", 0xFF228B22;
    FUCHSIA = "fuchsia", 0xFFFF00FF;
    GAINSBORO = "gainsboro", 0xFFDCDCDC;
    GHOST_WHITE = "ghostwhite", 0xFFF8F8FF;
    GOLD = "gold", 0xFFFFD700;
    GOLDENROD = "goldenrod", 0xFFDAA520;
    GRAY = "gray", 0xFF808080;
    GREEN = "green", 0xFF008000;
    GREEN_YELLOW = "greenyellow", 0xFFADFF2F;
    HONEYDEW = "honeydew", 0xFFF0FFF0;
    HOT_PINK = "hotpink", 0xFFFF69B4;
    INDIAN_RED = "indianred", 0xFFCD5C5C;
    INDIGO = "indigo", 0xFF4B0082;
    IVORY = "ivory", 0xFFFFFFF0;
    KHAKI = "khaki", 0xFFF0E68C;
    LAVENDER = "lavender", 0xFFE6E6FA;
    LAVENDER_BLUSH = "lavenderblush", 0xFFFFF0F5;
    LAWN_GREEN = "lawngreen", 0xFF7CFC00;
    LEMON_CHIFFON = "lemonchiffon", 0xFFFFFACD;
    LIGHT_BLUE = "lightblue", 0xFFADD8E6;
    LIGHT_CORAL = "lightcoral", 0xFFF08080;
    LIGHT_CYAN = "lightcyan", 0xFFE0FFFF;
    LIGHT_GOLDENROD_YELLOW = "lightgoldenrodyellow", 0xFFFAFAD2;
    LIGHT_GRAY = "lightgray", 0xFFD3D3D3;
    LIGHT_GREEN = "lightgreen", 0xFF90EE90;
    LIGHT_PINK = "lightpink", 0xFFFFB6C1;
    LIGHT_SALMON = "lightsalmon", 0xFFFFA07A;
    LIGHT_SEA_GREEN = "lightseagreen", 0xFF20B2AA;
    LIGHT_SKY_BLUE = "lightskyblue", 0xFF87CEFA;
    LIGHT_SLATE_GRAY = "lightslategray", 0xFF778899;
    LIGHT_STEEL_BLUE = "lightsteelblue", 0xFFB0C4DE;
    LIGHT_YELLOW = "lightyellow", 0xFFFFFFE0;
    LIME = "lime", 0xFF00FF00;
    LIME_GREEN = "limegreen", 0xFF32CD32;
    LINEN = "linen", 0xFFFAF0E6;
    MAGENTA = "magenta", 0xFFFF00FF;
    MAROON = "maroon", 0xFF800000;
    MEDIUM_AQUAMARINE = "mediumaquamarine", 0xFF66CDAA;
    MEDIUM_BLUE = "mediumblue", 0xFF0000CD;
    MEDIUM_ORCHID = "mediumorchid", 0xFFBA55D3;
    MEDIUM_PURPLE = "mediumpurple", 0xFF9370DB;
    MEDIUM_SEA_GREEN = "mediumseagreen", 0xFF3CB371;
    MEDIUM_SLATE_BLUE = "mediumslateblue", 0xFF7B68EE;
    MEDIUM_SPRING_GREEN = "mediumspringgreen", 0xFF00FA9A;
    MEDIUM_TURQUOISE = "mediumturquoise", 0xFF48D1CC;
    MEDIUM_VIOLET_RED = "mediumvioletred", 0xFFC71585;
    MIDNIGHT_BLUE = "midnightblue", 0xFF191970;
    MINT_CREAM = "mintcream", 0xFFF5FFFA;
    MISTY_ROSE = "mistyrose", 0xFFFFE4E1;
    MOCCASIN = "moccasin", 0xFFFFE4B5;
    NAVAJO_WHITE = "navajowhite", 0xFFFFDEAD;
    NAVY = "navy", 0xFF000080;
    OLD_LACE = "oldlace", 0xFFFDF5E6;
    OLIVE = "olive", 0xFF808000;
    OLIVE_DRAB = "olivedrab", 0xFF6B8E23;
    ORANGE = "orange", 0xFFFFA500;
    ORANGE_RED = "orangered", 0xFFFF4500;
    ORCHID = "orchid", 0xFFDA70D6;
    PALE_GOLDENROD = "palegoldenrod", 0xFFEEE8AA;
    PALE_GREEN = "palegreen", 0xFF98FB98;
    PALE_TURQUOISE = "paleturquoise", 0xFFAFEEEE;
    PALE_VIOLET_RED = "palevioletred", 0xFFDB7093;
    PAPAYA_WHIP = "papayawhip", 0xFFFFEFD5;
    PEACH_PUFF = "peachpuff", 0xFFFFDAB9;
    PERU = "peru", 0xFFCD853F;
    PINK = "pink", 0xFFFFC0CB;
    PLUM = "plum", 0xFFDDA0DD;
    POWDER_BLUE = "powderblue", 0xFFB0E0E6;
    PURPLE = "purple", 0xFF800080;
    REBECCA_PURPLE = "rebeccapurple", 0xFF663399;
    RED = "red", 0xFFFF0000;
    ROSY_BROWN = "rosybrown", 0xFFBC8F8F;
    ROYAL_BLUE = "royalblue", 0xFF4169E1;
    SADDLE_BROWN = "saddlebrown", 0xFF8B4513;
    SALMON = "salmon", 0xFFFA8072;
    SANDY_BROWN = "sandybrown", 0xFFF4A460;
    SEA_GREEN = "seagreen", 0xFF2E8B57;
    SEA_SHELL = "seashell", 0xFFFFF5EE;
    SIENNA = "sienna", 0xFFA0522D;
    SILVER = "silver", 0xFFC0C0C0;
    SKY_BLUE = "skyblue", 0xFF87CEEB;
    SLATE_BLUE = "slateblue", 0xFF6A5ACD;
    SLATE_GRAY = "slategray", 0xFF708090;
    SNOW = "snow", 0xFFFFFAFA;
    SPRING_GREEN = "springgreen", 0xFF00FF7F;
    STEEL_BLUE = "steelblue", 0xFF4682B4;
    TAN = "tan", 0xFFD2B48C;
    TEAL = "teal", 0xFF008080;
    THISTLE = "thistle", 0xFFD8BFD8;
    TOMATO = "tomato", 0xFFFF6347;
    TRANSPARENT = "transparent", 0x00FFFFFF;
    TURQUOISE = "turquoise", 0xFF40E0D0;
    VIOLET = "violet", 0xFFEE82EE;
    WHEAT = "wheat", 0xFFF5DEB3;
    WHITE = "white", 0xFFFFFFFF;
    WHITE_SMOKE = "whitesmoke", 0xFFF5F5F5;
    YELLOW = "yellow", 0xFFFFFF00;
    YELLOW_GREEN = "yellowgreen", 0xFF9ACD32;
}

/// Resolves a CSS color name, case-insensitively.
pub fn lookup(name: &str) -> Option<Color> {
    NAMED.get(name.to_ascii_lowercase().as_str()).copied()
}

/// All named colors keyed by lowercase name, in declaration order.
pub fn all() -> &'static OrderMap<&'static str, Color> {
    &NAMED
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constants_match_their_hex_codes() {
        assert_eq!(ALICE_BLUE, "#F0F8FF".parse().unwrap());
        assert_eq!(REBECCA_PURPLE, "#663399".parse().unwrap());
        assert_eq!(YELLOW_GREEN, "#9ACD32".parse().unwrap());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("AliceBlue"), Some(ALICE_BLUE));
        assert_eq!(lookup("rebeccapurple"), Some(REBECCA_PURPLE));
        assert_eq!(lookup("SLATEGRAY"), Some(SLATE_GRAY));
        assert_eq!(lookup("not-a-color"), None);
    }

    #[test]
    fn transparent_has_zero_alpha() {
        assert_eq!(TRANSPARENT.a, 0);
        assert_eq!(TRANSPARENT, Color::argb(0, 255, 255, 255));
    }

    #[test]
    fn table_is_complete_and_opaque() {
        assert_eq!(all().len(), 142);
        for (name, color) in all() {
            if *name != "transparent" {
                assert_eq!(color.a, 255, "{} should be opaque", name);
            }
        }
    }
}
