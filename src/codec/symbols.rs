/// Grid symbols, indexed by the byte stored in a flat array.
///
/// `X` shows up twice (index 1 and 29); the duplicate is kept so that
/// reports stay identical to the ones produced by earlier versions of the tool.
pub const TILE_SYMBOLS: [char; 65] = [
    '.', 'X', '#', '%', '*', '-',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '@', '$', '^', '~', '&', '+', '?',
    '█', '░', '▒', '▓',
    '<', '>', '(', ')', '[', ']', '{', '}', ',', '/', '\\', '`', '"',
];

/// Rendered for indices past the end of a symbol table.
pub const OUT_OF_RANGE_SYMBOL: char = '!';

/// Rendered for grid cells the flat array does not cover.
pub const MISSING_CELL_SYMBOL: char = ' ';

pub fn symbol_for(index: usize) -> char {
    TILE_SYMBOLS.get(index).copied().unwrap_or(OUT_OF_RANGE_SYMBOL)
}

/// Reverse lookup. Returns the first index carrying `symbol`.
pub fn index_of_symbol(symbol: char) -> Option<usize> {
    TILE_SYMBOLS.iter().position(|&c| c == symbol)
}

/// 8-way facing of a starting position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Facing {
    #[default]
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Facing {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::North),
            1 => Some(Self::NorthEast),
            2 => Some(Self::East),
            3 => Some(Self::SouthEast),
            4 => Some(Self::South),
            5 => Some(Self::SouthWest),
            6 => Some(Self::West),
            7 => Some(Self::NorthWest),
            _ => None,
        }
    }

    /// Letter form: uppercase for cardinals, lowercase for the diagonal clockwise of it.
    pub fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::NorthEast => 'n',
            Self::East => 'E',
            Self::SouthEast => 'e',
            Self::South => 'S',
            Self::SouthWest => 's',
            Self::West => 'W',
            Self::NorthWest => 'w',
        }
    }

    pub fn arrow(self) -> char {
        match self {
            Self::North => '↑',
            Self::NorthEast => '↗',
            Self::East => '→',
            Self::SouthEast => '↘',
            Self::South => '↓',
            Self::SouthWest => '↙',
            Self::West => '←',
            Self::NorthWest => '↖',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table_layout() {
        assert_eq!(symbol_for(0), '.');
        assert_eq!(symbol_for(1), 'X');
        assert_eq!(symbol_for(6), 'A');
        assert_eq!(symbol_for(29), 'X');
        assert_eq!(symbol_for(32), '1');
        assert_eq!(symbol_for(48), '█');
        assert_eq!(symbol_for(64), '"');
        assert_eq!(symbol_for(65), OUT_OF_RANGE_SYMBOL);
        assert!(!TILE_SYMBOLS.contains(&OUT_OF_RANGE_SYMBOL));
    }

    #[test]
    fn test_reverse_lookup_prefers_first() {
        assert_eq!(index_of_symbol('X'), Some(1));
        assert_eq!(index_of_symbol('Y'), Some(30));
        assert_eq!(index_of_symbol('!'), None);
    }

    #[test]
    fn test_facing_symbols() {
        let letters: String = (0..8).filter_map(Facing::from_u8).map(Facing::symbol).collect();
        assert_eq!(letters, "NnEeSsWw");
        assert_eq!(Facing::from_u8(8), None);
        assert_eq!(Facing::SouthWest.arrow(), '↙');
    }
}
