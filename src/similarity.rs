//! Ratcliff/Obershelp similarity over Unicode scalar values.
//!
//! Scores agree with Python's `difflib.SequenceMatcher(None, a, b).ratio()`,
//! including its "popular element" heuristic: when `b` has 200 or more
//! characters, characters occurring more than `len(b) / 100 + 1` times are not
//! used to seed matches.

use std::collections::HashMap;

/// Sequences at least this long get popular-element pruning.
const AUTOJUNK_MIN_LEN: usize = 200;

/// `2 * M / T` where `M` is the number of matched characters across all
/// matching blocks and `T` the combined length. Two empty strings score 1.0.
pub fn ratio(a: &str, b: &str) -> f64 {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  let total = a.len() + b.len();
  if total == 0 {
    return 1.0;
  }
  let matched: usize = matching_blocks(&a, &b).iter().map(|m| m.size).sum();
  2.0 * matched as f64 / total as f64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
  pub a: usize,
  pub b: usize,
  pub size: usize,
}

/// Non-overlapping matching blocks, sorted by position, without the zero-size sentinel.
pub fn matching_blocks(a: &[char], b: &[char]) -> Vec<Block> {
  let b2j = index_b(b);
  let mut queue = vec![(0, a.len(), 0, b.len())];
  let mut blocks = Vec::new();

  while let Some((alo, ahi, blo, bhi)) = queue.pop() {
    let m = longest_match(a, b, &b2j, alo, ahi, blo, bhi);
    if m.size == 0 {
      continue;
    }
    if alo < m.a && blo < m.b {
      queue.push((alo, m.a, blo, m.b));
    }
    if m.a + m.size < ahi && m.b + m.size < bhi {
      queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
    }
    blocks.push(m);
  }

  blocks.sort_by_key(|m| (m.a, m.b));
  blocks
}

/// Positions of every character of `b`, minus popular characters for long inputs.
fn index_b(b: &[char]) -> HashMap<char, Vec<usize>> {
  let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
  for (j, ch) in b.iter().enumerate() {
    b2j.entry(*ch).or_default().push(j);
  }
  if b.len() >= AUTOJUNK_MIN_LEN {
    let ntest = b.len() / 100 + 1;
    b2j.retain(|_, idxs| idxs.len() <= ntest);
  }
  b2j
}

/// Longest block in `a[alo..ahi]` / `b[blo..bhi]`. Among equally long blocks the
/// one starting earliest in `a`, then earliest in `b`, wins.
fn longest_match(
  a: &[char],
  b: &[char],
  b2j: &HashMap<char, Vec<usize>>,
  alo: usize,
  ahi: usize,
  blo: usize,
  bhi: usize,
) -> Block {
  let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0usize);
  // j2len[j] = length of the match ending at a[i-1], b[j]
  let mut j2len: HashMap<usize, usize> = HashMap::new();

  for i in alo..ahi {
    let mut next: HashMap<usize, usize> = HashMap::new();
    if let Some(idxs) = b2j.get(&a[i]) {
      for &j in idxs {
        if j < blo {
          continue;
        }
        if j >= bhi {
          break;
        }
        let k = j.checked_sub(1).and_then(|p| j2len.get(&p)).copied().unwrap_or(0) + 1;
        next.insert(j, k);
        if k > bestsize {
          besti = i + 1 - k;
          bestj = j + 1 - k;
          bestsize = k;
        }
      }
    }
    j2len = next;
  }

  // Popular characters were left out of b2j; grow the block across them.
  while besti > alo && bestj > blo && a[besti - 1] == b[bestj - 1] {
    besti -= 1;
    bestj -= 1;
    bestsize += 1;
  }
  while besti + bestsize < ahi && bestj + bestsize < bhi && a[besti + bestsize] == b[bestj + bestsize] {
    bestsize += 1;
  }

  Block { a: besti, b: bestj, size: bestsize }
}
