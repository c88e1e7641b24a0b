//! Hidden symbol layout ("answer key") of a board.

use std::ops::Index;

use im::Vector;
use rand::Rng;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{GameConfig, GameError, Position, Result, Symbol};

/// Symbol assigned to each position, each symbol exactly twice.
///
/// Fixed at creation. Backed by `im::Vector`, so cloning a board for a
/// snapshot does not copy the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    symbols: Vector<Symbol>,
}

impl Layout {
    /// Shuffle `config.pair_count` numbered symbol pairs onto the board.
    ///
    /// Every position, in order, takes a uniformly chosen token from the
    /// shrinking pool of remaining tokens. Drawing without replacement
    /// this way yields a uniform permutation (it is Fisher-Yates run
    /// front to back).
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut pool: Vec<Symbol> = (1..=config.pair_count)
            .chain(1..=config.pair_count)
            .map(Symbol::numbered)
            .collect();

        let mut symbols = Vector::new();
        while !pool.is_empty() {
            let pick = rng.gen_range(0..pool.len());
            symbols.push_back(pool.swap_remove(pick));
        }

        Ok(Self { symbols })
    }

    /// Build a layout from explicit symbols, in position order.
    ///
    /// Fails with a configuration error unless the board is non-empty and
    /// every symbol appears exactly twice.
    pub fn from_symbols<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols: Vector<Symbol> = symbols.into_iter().map(Into::into).collect();
        check_pairing(&symbols)
            .map_err(|reason| GameError::configuration(symbols.len() / 2, reason))?;
        Ok(Self { symbols })
    }

    /// Like `from_symbols`, but reports violations as corrupt stored state.
    pub(crate) fn from_stored(symbols: Vec<Symbol>) -> Result<Self> {
        let symbols: Vector<Symbol> = symbols.into_iter().collect();
        check_pairing(&symbols).map_err(GameError::corrupt)?;
        Ok(Self { symbols })
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len() / 2
    }

    /// Symbol at `position`, if it is on the board.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Symbol> {
        self.symbols.get(position.index())
    }

    /// Symbol at `position`, or `InvalidPosition`.
    pub fn symbol_at(&self, position: Position) -> Result<&Symbol> {
        self.get(position).ok_or(GameError::InvalidPosition {
            position,
            card_count: self.card_count(),
        })
    }

    /// All positions showing `symbol` (two on a valid board).
    #[must_use]
    pub fn positions_of(&self, symbol: &Symbol) -> SmallVec<[Position; 2]> {
        self.iter()
            .filter(|(_, s)| *s == symbol)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// The other position carrying the same symbol as `position`.
    #[must_use]
    pub fn partner_of(&self, position: Position) -> Option<Position> {
        let symbol = self.get(position)?;
        self.positions_of(symbol)
            .into_iter()
            .find(|&other| other != position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| (Position(i as u32), symbol))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}

impl Index<Position> for Layout {
    type Output = Symbol;

    fn index(&self, position: Position) -> &Self::Output {
        &self.symbols[position.index()]
    }
}

fn check_pairing(symbols: &Vector<Symbol>) -> std::result::Result<(), String> {
    if symbols.is_empty() {
        return Err("board has no cards".to_owned());
    }
    if symbols.len() % 2 != 0 {
        return Err(format!("board has an odd number of cards ({})", symbols.len()));
    }
    if symbols.len() > u32::MAX as usize {
        return Err("card count does not fit a board position".to_owned());
    }

    let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
    for symbol in symbols {
        *counts.entry(symbol).or_default() += 1;
    }
    match counts.iter().find(|&(_, &count)| count != 2) {
        Some((symbol, count)) => Err(format!(
            "symbol '{symbol}' appears {count} times, expected exactly 2"
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn counts(layout: &Layout) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for symbol in layout.symbols() {
            *counts.entry(symbol.clone()).or_default() += 1;
        }
        counts
    }

    #[test]
    fn test_generate_pairs_every_symbol() {
        let mut rng = GameRng::new(42);
        let layout = Layout::generate(&GameConfig::new(6), &mut rng).unwrap();

        assert_eq!(layout.card_count(), 12);
        assert_eq!(layout.pair_count(), 6);

        let counts = counts(&layout);
        assert_eq!(counts.len(), 6);
        for ordinal in 1..=6 {
            assert_eq!(counts[&Symbol::numbered(ordinal)], 2);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = GameConfig::new(8);
        let a = Layout::generate(&config, &mut GameRng::new(7)).unwrap();
        let b = Layout::generate(&config, &mut GameRng::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_rejects_zero_pairs() {
        let err = Layout::generate(&GameConfig::new(0), &mut GameRng::new(1)).unwrap_err();
        assert!(matches!(err, GameError::Configuration { .. }));
    }

    #[test]
    fn test_generate_single_pair() {
        let layout = Layout::generate(&GameConfig::new(1), &mut GameRng::new(3)).unwrap();
        assert_eq!(
            layout.symbols().cloned().collect::<Vec<_>>(),
            vec![Symbol::numbered(1); 2]
        );
    }

    #[test]
    fn test_generate_spreads_first_card() {
        // Every symbol should show up at position 0 for some seed.
        let config = GameConfig::new(4);
        let mut seen = FxHashMap::default();
        for seed in 0..200 {
            let layout = Layout::generate(&config, &mut GameRng::new(seed)).unwrap();
            *seen.entry(layout[Position(0)].clone()).or_insert(0) += 1;
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_from_symbols_validates() {
        assert!(Layout::from_symbols(["A", "A", "B", "B"]).is_ok());
        assert!(Layout::from_symbols(Vec::<&str>::new()).is_err());
        assert!(Layout::from_symbols(["A", "A", "B"]).is_err());
        assert!(Layout::from_symbols(["A", "A", "A", "A"]).is_err());
        assert!(Layout::from_symbols(["A", "B", "C", "A"]).is_err());
    }

    #[test]
    fn test_from_stored_reports_corrupt_state() {
        let err = Layout::from_stored(vec![Symbol::from("A")]).unwrap_err();
        assert!(matches!(err, GameError::CorruptState(_)));
    }

    #[test]
    fn test_partner_lookup() {
        let layout = Layout::from_symbols(["A", "B", "A", "B"]).unwrap();
        assert_eq!(layout.partner_of(Position(0)), Some(Position(2)));
        assert_eq!(layout.partner_of(Position(3)), Some(Position(1)));
        assert_eq!(layout.partner_of(Position(4)), None);
        assert_eq!(
            layout.positions_of(&Symbol::from("B")).as_slice(),
            &[Position(1), Position(3)]
        );
    }

    #[test]
    fn test_symbol_at_out_of_range() {
        let layout = Layout::from_symbols(["A", "A"]).unwrap();
        assert_eq!(layout.symbol_at(Position(1)).unwrap(), &Symbol::from("A"));
        assert!(matches!(
            layout.symbol_at(Position(2)),
            Err(GameError::InvalidPosition { card_count: 2, .. })
        ));
    }
}
