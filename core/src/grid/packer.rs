use std::collections::HashSet;

use log::debug;

use super::{
  placement::{Bucket, Card, Placement, PlacementMap},
  random::{EntropySource, Lcg, UnitRandom},
};
use crate::geometry::{ring, HexCoord};

/// Packs the cards onto a hex grid around the "Ich bin" anchor.
///
/// `oft` cards are placed before `manchmal` cards, which biases them towards
/// the center. With a `seed` the layout is fully reproducible; without one a
/// non-deterministic source is used.
pub fn pack(oft: &[Card], manchmal: &[Card], seed: Option<u64>) -> PlacementMap {
  match seed {
    Some(seed) => pack_with(oft, manchmal, &mut Lcg::new(seed)),
    None => pack_with(oft, manchmal, &mut EntropySource::new()),
  }
}

/// [`pack`] with an explicit random source.
pub fn pack_with<R: UnitRandom>(oft: &[Card], manchmal: &[Card], rng: &mut R) -> PlacementMap {
  let mut packer = Packer::new();
  for card in oft {
    packer.place(card, Bucket::Oft, rng);
  }
  for card in manchmal {
    packer.place(card, Bucket::Manchmal, rng);
  }
  debug!(
    "packed {} cards, outermost ring {}",
    packer.placements.len() - 1,
    packer.max_radius()
  );
  packer.placements
}

struct Packer {
  placements: PlacementMap,
  occupied: HashSet<HexCoord>,
  // candidate cells, kept in the order they were discovered
  frontier: Vec<HexCoord>,
}

impl Packer {
  fn new() -> Packer {
    let center = HexCoord::ORIGIN;
    let mut placements = PlacementMap::new();
    placements.insert(Placement {
      hex: center,
      card: Card::anchor(),
      bucket: Bucket::Center,
    });

    Packer {
      placements,
      occupied: HashSet::from([center]),
      frontier: center.neighbors().to_vec(),
    }
  }

  fn max_radius(&self) -> u32 {
    self
      .occupied
      .iter()
      .map(HexCoord::ring_index)
      .max()
      .unwrap_or(0)
  }

  /// Refills an exhausted frontier with the free cells of the next ring out.
  fn expand(&mut self) {
    let radius = self.max_radius() + 1;
    debug!("frontier exhausted, expanding to ring {radius}");
    let occupied = &self.occupied;
    self.frontier.extend(
      ring(HexCoord::ORIGIN, radius)
        .into_iter()
        .filter(|hex| !occupied.contains(hex)),
    );
    assert!(
      !self.frontier.is_empty(),
      "ring {radius} has no free cells; refusing to drop a card"
    );
  }

  fn place<R: UnitRandom>(&mut self, card: &Card, bucket: Bucket, rng: &mut R) {
    if self.frontier.is_empty() {
      self.expand();
    }

    let index = rng.next_index(self.frontier.len());
    let hex = self.frontier.remove(index);

    let inserted = self.placements.insert(Placement {
      hex,
      card: card.clone(),
      bucket,
    });
    assert!(inserted, "frontier cell {hex} was already occupied");
    self.occupied.insert(hex);

    for neighbor in hex.neighbors() {
      if !self.occupied.contains(&neighbor) && !self.frontier.contains(&neighbor) {
        self.frontier.push(neighbor);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::VecDeque;

  use super::*;
  use crate::geometry::spiral;

  fn cards(prefix: &str, n: usize) -> Vec<Card> {
    (0..n)
      .map(|i| Card::new(i as i64, &format!("{prefix}{i}")))
      .collect()
  }

  fn outermost_ring(map: &PlacementMap) -> u32 {
    map.iter().map(|p| p.hex.ring_index()).max().unwrap_or(0)
  }

  fn is_connected(map: &PlacementMap) -> bool {
    let mut seen = HashSet::from([HexCoord::ORIGIN]);
    let mut queue = VecDeque::from([HexCoord::ORIGIN]);
    while let Some(hex) = queue.pop_front() {
      for n in hex.neighbors() {
        if map.contains(&n) && seen.insert(n) {
          queue.push_back(n);
        }
      }
    }
    seen.len() == map.len()
  }

  /// Always picks the first frontier cell.
  struct FirstPick;

  impl UnitRandom for FirstPick {
    fn next_unit(&mut self) -> f64 {
      0.0
    }
  }

  /// Always picks the last frontier cell.
  struct LastPick;

  impl UnitRandom for LastPick {
    fn next_unit(&mut self) -> f64 {
      0.999_999
    }
  }

  #[test]
  fn empty_input_places_only_the_anchor() {
    let map = pack(&[], &[], Some(42));
    assert_eq!(map.len(), 1);
    let center = map.get(&HexCoord::ORIGIN).unwrap();
    assert_eq!(center.bucket, Bucket::Center);
    assert_eq!(center.card, Card::anchor());
    assert_eq!(center.card.word, "Ich bin");
  }

  #[test]
  fn same_seed_gives_identical_maps() {
    let oft = cards("oft", 9);
    let manchmal = cards("manchmal", 14);
    for seed in [0, 1, 42, 43, 1_760_000_000_123] {
      let a = pack(&oft, &manchmal, Some(seed));
      let b = pack(&oft, &manchmal, Some(seed));
      assert_eq!(a, b);
      let order_a: Vec<_> = a.iter().cloned().collect();
      let order_b: Vec<_> = b.iter().cloned().collect();
      assert_eq!(order_a, order_b);
    }
  }

  #[test]
  fn single_card_is_deterministic_per_seed() {
    let oft = vec![Card::new(1, "mutig")];
    let a = pack(&oft, &[], Some(42));
    let b = pack(&oft, &[], Some(42));
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);

    let placed = a.iter().nth(1).unwrap();
    assert_eq!(placed.card.word, "mutig");
    assert_eq!(placed.bucket, Bucket::Oft);
    assert_eq!(placed.hex.ring_index(), 1);

    // seed 42: first LCG output picks frontier index floor(u * 6)
    let mut lcg = Lcg::new(42);
    let expected = HexCoord::ORIGIN.neighbors()[lcg.next_index(6)];
    assert_eq!(placed.hex, expected);

    let c = pack(&oft, &[], Some(43));
    assert_eq!(c.len(), 2);
    assert_eq!(c.iter().nth(1).unwrap().hex.ring_index(), 1);
  }

  #[test]
  fn every_card_is_placed_exactly_once() {
    for n_oft in [0, 1, 6, 13, 50] {
      for n_manchmal in [0, 2, 7, 31, 50] {
        let oft = cards("o", n_oft);
        let manchmal = cards("m", n_manchmal);
        let map = pack(&oft, &manchmal, Some((n_oft * 100 + n_manchmal) as u64));
        assert_eq!(map.len(), 1 + n_oft + n_manchmal);

        let unique: HashSet<HexCoord> = map.iter().map(|p| p.hex).collect();
        assert_eq!(unique.len(), map.len());

        let oft_words: Vec<&str> = map
          .iter()
          .filter(|p| p.bucket == Bucket::Oft)
          .map(|p| p.card.word.as_str())
          .collect();
        let expected: Vec<&str> = oft.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(oft_words, expected);
      }
    }
  }

  #[test]
  fn placements_form_one_connected_region() {
    for seed in 0..25 {
      let map = pack(&cards("o", 12), &cards("m", 25), Some(seed));
      assert!(is_connected(&map), "disconnected layout for seed {seed}");
    }
  }

  #[test]
  fn unseeded_layouts_are_complete_and_connected() {
    let map = pack(&cards("o", 20), &cards("m", 20), None);
    assert_eq!(map.len(), 41);
    assert!(is_connected(&map));
  }

  #[test]
  fn seven_cards_reach_the_second_ring() {
    for seed in 0..20 {
      let map = pack(&cards("o", 7), &[], Some(seed));
      assert!(outermost_ring(&map) >= 2);
    }
  }

  #[test]
  fn twenty_cells_reach_the_third_ring() {
    // 1 + 6 + 12 = 19 cells fill rings 0..=2 completely
    assert_eq!(spiral(HexCoord::ORIGIN, 2).len(), 19);
    for seed in 0..20 {
      let eighteen = pack(&cards("o", 18), &[], Some(seed));
      assert_eq!(eighteen.len(), 19);
      assert!(outermost_ring(&eighteen) >= 2);

      let nineteen = pack(&cards("o", 10), &cards("m", 9), Some(seed));
      assert_eq!(nineteen.len(), 20);
      assert!(outermost_ring(&nineteen) >= 3);
    }
  }

  #[test]
  fn never_panics_up_to_fifty_cards() {
    for n in 0..=50 {
      let map = pack(&cards("o", n / 2), &cards("m", n - n / 2), Some(n as u64));
      assert_eq!(map.len(), n + 1);
      assert!(is_connected(&map));
    }
    let map = pack(&cards("o", 37), &[], Some(5));
    assert_eq!(map.len(), 38);
  }

  #[test]
  fn first_pick_source_grows_compactly() {
    let map = pack_with(&cards("o", 6), &[], &mut FirstPick);
    let first_ring: HashSet<HexCoord> = HexCoord::ORIGIN.neighbors().into_iter().collect();
    assert_eq!(map.iter().nth(1).unwrap().hex, HexCoord::new(1, 0));
    // picking the oldest frontier cell exhausts ring 1 before going further
    let placed: HashSet<HexCoord> = map.iter().skip(1).map(|p| p.hex).collect();
    assert_eq!(placed, first_ring);
  }

  #[test]
  fn last_pick_source_stays_connected() {
    let map = pack_with(&cards("o", 30), &cards("m", 10), &mut LastPick);
    assert_eq!(map.len(), 41);
    assert!(is_connected(&map));
  }

  #[test]
  fn expand_adds_only_free_cells_of_the_next_ring() {
    let mut packer = Packer::new();
    packer.frontier.clear();
    packer.expand();
    assert_eq!(packer.frontier.len(), 6);
    assert!(packer.frontier.iter().all(|h| h.ring_index() == 1));

    let mut packer = Packer::new();
    let mut rng = Lcg::new(3);
    for card in cards("o", 6) {
      packer.place(&card, Bucket::Oft, &mut rng);
    }
    packer.frontier.clear();
    let radius = packer.max_radius();
    packer.expand();
    assert!(packer.frontier.iter().all(|h| h.ring_index() == radius + 1));
    assert!(packer.frontier.iter().all(|h| !packer.occupied.contains(h)));
  }

  #[test]
  fn input_cards_are_left_untouched() {
    let oft = cards("o", 4);
    let before = oft.clone();
    let _ = pack(&oft, &[], Some(1));
    assert_eq!(oft, before);
  }
}
