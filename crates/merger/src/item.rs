use std::cell::Cell;

use crate::rank::{Rank, Ranked};

/// A single ranked result line.
#[derive(Debug, Clone)]
pub struct Item {
    text: String,
    /// Position in the original input
    index: u32,
    points: u32,

    /// Rank computed when it was last requested
    rank: Cell<Option<Rank>>,
}

impl Item {
    pub fn new(text: &str, index: u32, points: u32) -> Item {
        Item {
            text: text.into(),
            index,
            points,
            rank: Cell::new(None),
        }
    }

    /// Parse an input line of form `<points>\t<text>`.
    /// Lines without a numeric prefix get zero points and keep the whole line
    /// as text.
    pub fn parse(line: &str, index: u32) -> Item {
        if let Some((points, text)) = line.split_once('\t') {
            if let Ok(points) = points.trim().parse::<u32>() {
                return Item::new(text, index, points);
            }
        }

        Item::new(line, index, 0)
    }

    /// Rank of this item. The cached rank is returned unless `recompute` is
    /// set or no rank has been computed yet.
    pub fn rank(&self, recompute: bool) -> Rank {
        if !recompute {
            if let Some(rank) = self.rank.get() {
                return rank;
            }
        }

        let length = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        let rank = Rank::new(self.points, length, self.index);
        self.rank.set(Some(rank));
        rank
    }

    /// Change the points of this item, takes effect on the next recompute.
    pub fn rescore(&mut self, points: u32) {
        self.points = points;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

impl Ranked for Item {
    type Rank = Rank;

    fn rank(&self) -> Rank {
        Item::rank(self, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scored() {
        let item = Item::parse("12\tfoo bar", 3);
        assert_eq!(item.points(), 12);
        assert_eq!(item.text(), "foo bar");
        assert_eq!(item.index(), 3);
    }

    #[test]
    fn parse_unscored() {
        let item = Item::parse("no score here", 0);
        assert_eq!(item.points(), 0);
        assert_eq!(item.text(), "no score here");

        let item = Item::parse("x\ty", 1);
        assert_eq!(item.points(), 0);
        assert_eq!(item.text(), "x\ty");
    }

    #[test]
    fn rank_is_cached() {
        let mut item = Item::new("abc", 4, 10);
        assert_eq!(item.rank(false), Rank::new(10, 3, 4));

        item.rescore(1);
        assert_eq!(item.rank(false), Rank::new(10, 3, 4));
        assert_eq!(item.rank(true), Rank::new(1, 3, 4));
        assert_eq!(Ranked::rank(&item), Rank::new(1, 3, 4));
    }
}
