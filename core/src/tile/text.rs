//! Fitting a word into a hexagon: line splitting and font sizing.
//!
//! Lengths are counted in chars, so umlauts count as one.

use serde::Serialize;

use crate::geometry::Float;

/// Words shorter than this stay on one line.
pub const SPLIT_THRESHOLD: usize = 12;
/// Target number of chars per line when splitting.
pub const LINE_BUDGET: usize = 10;
pub const MAX_LINES: usize = 3;

const FONT_SCALE: Float = 2.8;
pub const MIN_FONT_FRACTION: Float = 0.16;
pub const MAX_FONT_FRACTION: Float = 0.35;
pub const LINE_HEIGHT_FACTOR: Float = 1.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
  pub text: String,
  /// Vertical offset of the line's center from the tile center.
  pub y: Float,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLayout {
  pub font_size: Float,
  pub line_height: Float,
  pub lines: Vec<TextLine>,
}

fn char_len(s: &str) -> usize {
  s.chars().count()
}

/// Splits a word into at most [`MAX_LINES`] lines.
///
/// Short words are kept whole. Longer ones break at spaces and hyphens,
/// packing tokens greedily into lines of [`LINE_BUDGET`] chars; tokens too
/// long for that are cut with a hyphen. A long word without break points is
/// cut into two or three even chunks, each cut marked with a hyphen.
pub fn split_lines(word: &str) -> Vec<String> {
  let word = word.trim();
  if word.is_empty() {
    return vec![];
  }
  if char_len(word) < SPLIT_THRESHOLD {
    return vec![word.to_string()];
  }

  let tokens = natural_tokens(word);
  if tokens.len() > 1 {
    pack_tokens(tokens)
  } else {
    force_split(word)
  }
}

// hyphens stay attached to the token before them, spaces are dropped
fn natural_tokens(word: &str) -> Vec<String> {
  let mut tokens = vec![];
  let mut current = String::new();
  for c in word.chars() {
    if c.is_whitespace() {
      if !current.is_empty() {
        tokens.push(std::mem::take(&mut current));
      }
    } else {
      current.push(c);
      if c == '-' {
        tokens.push(std::mem::take(&mut current));
      }
    }
  }
  if !current.is_empty() {
    tokens.push(current);
  }
  tokens
}

fn join_token(line: &mut String, token: &str) {
  if !line.is_empty() && !line.ends_with('-') {
    line.push(' ');
  }
  line.push_str(token);
}

fn separator_len(line: &str) -> usize {
  if line.is_empty() || line.ends_with('-') {
    0
  } else {
    1
  }
}

fn joined_len(line: &str, token: &str) -> usize {
  char_len(line) + separator_len(line) + char_len(token)
}

fn fits(lines: &[String]) -> bool {
  lines.len() <= MAX_LINES && lines.iter().all(|l| char_len(l) <= LINE_BUDGET)
}

// Whole tokens first. If that overflows a line or needs more than MAX_LINES,
// tokens get broken with a hyphen instead.
fn pack_tokens(tokens: Vec<String>) -> Vec<String> {
  let mut lines: Vec<String> = vec![];
  let mut current = String::new();
  for token in &tokens {
    if current.is_empty() || joined_len(&current, token) <= LINE_BUDGET {
      join_token(&mut current, token);
    } else {
      lines.push(std::mem::replace(&mut current, token.clone()));
    }
  }
  if !current.is_empty() {
    lines.push(current);
  }

  if fits(&lines) {
    lines
  } else {
    fill_lines(tokens)
  }
}

/// Fills each line up to [`LINE_BUDGET`], cutting a token with a hyphen where
/// the line runs out. The last line takes whatever is left, so it only goes
/// over budget when the text doesn't fit into [`MAX_LINES`] lines at all.
fn fill_lines(tokens: Vec<String>) -> Vec<String> {
  let mut lines: Vec<String> = vec![];
  let mut current = String::new();
  for token in tokens {
    let mut rest: Vec<char> = token.chars().collect();
    while !rest.is_empty() {
      let piece: String = rest.iter().collect();
      if lines.len() + 1 == MAX_LINES || joined_len(&current, &piece) <= LINE_BUDGET {
        join_token(&mut current, &piece);
        rest.clear();
        continue;
      }

      let room = LINE_BUDGET.saturating_sub(char_len(&current) + separator_len(&current));
      // one char plus the hyphen, anything less starts a fresh line
      if room >= 2 {
        let head: String = rest.drain(..room - 1).collect();
        join_token(&mut current, &format!("{head}-"));
      }
      lines.push(std::mem::take(&mut current));
    }
  }
  if !current.is_empty() {
    lines.push(current);
  }
  lines
}

/// Even chunks of at most `LINE_BUDGET - 1` chars plus the hyphen.
///
/// Words longer than `MAX_LINES * (LINE_BUDGET - 1)` chars still get only three
/// chunks, so those lines go over the budget. The font size floor and the
/// hexagon clip path cover that case.
fn force_split(word: &str) -> Vec<String> {
  let chars: Vec<char> = word.chars().collect();
  let pieces = ((chars.len() + LINE_BUDGET - 2) / (LINE_BUDGET - 1)).clamp(2, MAX_LINES);
  let chunk = (chars.len() + pieces - 1) / pieces;

  let chunks: Vec<String> = chars.chunks(chunk).map(|c| c.iter().collect()).collect();
  let last = chunks.len() - 1;
  chunks
    .into_iter()
    .enumerate()
    .map(|(i, mut c)| {
      if i < last {
        c.push('-');
      }
      c
    })
    .collect()
}

/// Font size for a tile whose longest line has `longest` chars.
pub fn font_size_for(longest: usize, size: Float) -> Float {
  if longest == 0 {
    return size * MAX_FONT_FRACTION;
  }
  let fraction = (FONT_SCALE / longest as Float).clamp(MIN_FONT_FRACTION, MAX_FONT_FRACTION);
  size * fraction
}

/// Splits, sizes and vertically centers the text for one tile.
pub fn layout_text(word: &str, size: Float) -> TextLayout {
  let lines = split_lines(word);
  let longest = lines.iter().map(|l| char_len(l)).max().unwrap_or(0);
  let font_size = font_size_for(longest, size);
  let line_height = font_size * LINE_HEIGHT_FACTOR;

  let middle = (lines.len() as Float - 1.0) / 2.0;
  let lines = lines
    .into_iter()
    .enumerate()
    .map(|(i, text)| TextLine {
      text,
      y: (i as Float - middle) * line_height,
    })
    .collect();

  TextLayout {
    font_size,
    line_height,
    lines,
  }
}
