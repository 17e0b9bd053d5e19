use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use universal_bloom::SortedMembershipSet;

/// Same entry count as the usual UNIX `words` file.
pub const DICTIONARY_SIZE: usize = 235_886;

/// A reproducible stand-in for a word list: `DICTIONARY_SIZE` distinct
/// lowercase words of 2 to 10 letters, never containing "asdfjkl".
pub fn load_dictionary() -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x5eed_d1c7);
    let mut words = BTreeSet::new();
    while words.len() < DICTIONARY_SIZE {
        let len = rng.gen_range(2..=10);
        let word: String = (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
        if word != "asdfjkl" {
            words.insert(word);
        }
    }
    words.into_iter().collect()
}

/// Makes words that are not in `dictionary` by splicing "zs" into real ones.
pub fn create_fake_words(dictionary: &SortedMembershipSet<String>, num_samples: usize, seed: u64) -> Vec<String> {
    let real_words = dictionary.as_slice();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut output = Vec::with_capacity(num_samples);
    while output.len() < num_samples {
        let word = &real_words[rng.gen_range(0..real_words.len())];
        let fake = if word.len() <= 2 {
            format!("{}zs", word)
        } else {
            let z = rng.gen_range(1..word.len() - 1);
            format!("{}zs{}", &word[..z], &word[z..])
        };
        if !dictionary.contains(fake.as_str()) {
            output.push(fake);
        }
    }
    output
}
