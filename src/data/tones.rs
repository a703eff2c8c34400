// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tone extraction from pinyin, numbered (`shui3`) or marked (`shuǐ`).

const TONE_MARKS: [(u8, &str); 4] = [
    (1, "āēīōūǖĀĒĪŌŪǕ"),
    (2, "áéíóúǘÁÉÍÓÚǗ"),
    (3, "ǎěǐǒǔǚǍĚǏǑǓǙ"),
    (4, "àèìòùǜÀÈÌÒÙǛ"),
];

const NEUTRAL: u8 = 5;

/// Returns one tone (1 to 5) per syllable.
///
/// Syllables are separated by whitespace or punctuation. Numbered syllables
/// may also run together (`shui3guo3`). Marked syllables that run together
/// yield one tone per mark, so unmarked neutral syllables inside such a
/// word are lost.
pub fn parse_tones(pinyin: &str) -> Vec<u8> {
    let mut tones = Vec::new();
    for word in pinyin.split(|c: char| c.is_whitespace() || (c.is_ascii_punctuation() && c != '\'')) {
        if word.is_empty() {
            continue;
        }
        if word.chars().any(|c| c.is_ascii_digit()) {
            parse_numbered(word, &mut tones);
        } else {
            let marked: Vec<u8> = word.chars().filter_map(tone_of_mark).collect();
            if marked.is_empty() {
                tones.push(NEUTRAL);
            } else {
                tones.extend(marked);
            }
        }
    }
    tones
}

fn parse_numbered(word: &str, tones: &mut Vec<u8>) {
    let mut pending = false;
    for c in word.chars() {
        match c.to_digit(10) {
            Some(d @ 1..=5) => {
                tones.push(d as u8);
                pending = false;
            }
            Some(0) => {
                tones.push(NEUTRAL);
                pending = false;
            }
            Some(_) => {}
            None if c.is_alphabetic() => pending = true,
            None => {}
        }
    }
    // A trailing syllable without a number is neutral.
    if pending {
        tones.push(NEUTRAL);
    }
}

fn tone_of_mark(c: char) -> Option<u8> {
    TONE_MARKS
        .iter()
        .find(|(_, marks)| marks.contains(c))
        .map(|(tone, _)| *tone)
}
