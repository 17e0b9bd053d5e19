mod common;

use common::{create_fake_words, load_dictionary, DICTIONARY_SIZE};
use universal_bloom::{
    count_found, BloomFilter, FilterConfig, HashFingerprint, Membership, Prefiltered, RandomHashes,
    SortedMembershipSet,
};

type WordFilter = BloomFilter<str, HashFingerprint>;

#[test]
fn empty() {
    let bloom = WordFilter::new(100, 1, HashFingerprint::new(), RandomHashes::seeded(1)).unwrap();
    let words = load_dictionary();
    assert!(words.iter().all(|w| !bloom.contains(w)));
}

#[test]
fn one() {
    let mut bloom = WordFilter::new(1000, 3, HashFingerprint::new(), RandomHashes::seeded(2)).unwrap();
    bloom.insert("asdfjkl");
    let words = load_dictionary();
    for w in &words {
        assert!(!bloom.contains(w), "false positive for {:?}", w);
    }
    assert!(bloom.contains("asdfjkl"));
}

// ~7.4 bits per word and k = 5, close to (m / n) ln 2
#[test]
fn many() {
    let mut bloom = WordFilter::new(1_751_201, 5, HashFingerprint::new(), RandomHashes::seeded(3)).unwrap();
    let words = load_dictionary();
    assert_eq!(DICTIONARY_SIZE, words.len());
    words.iter().for_each(|w| bloom.insert(w));
    assert!(words.iter().all(|w| bloom.contains(w)));

    let dictionary = SortedMembershipSet::from(words);
    let fake_words = create_fake_words(&dictionary, 1000, 4);
    assert_eq!(0, count_found(fake_words.iter().map(String::as_str), &dictionary));

    assert_eq!(FilterConfig::new(1_751_201, 5).unwrap(), bloom.config());
    let false_positives = count_found(fake_words.iter().map(String::as_str), &bloom);
    let expected = bloom.estimated_fp_rate(DICTIONARY_SIZE) * 1000.0;
    assert!(expected < 50.0);
    assert!(false_positives < 50, "{} false positives, expected about {:.0}", false_positives, expected);
}

#[test]
fn bloom_assisted_lookup_is_exact() {
    let words = load_dictionary();
    let mut bloom =
        WordFilter::with_fp_rate(words.len(), 0.01, HashFingerprint::new(), RandomHashes::seeded(5)).unwrap();
    words.iter().for_each(|w| bloom.insert(w));
    let dictionary = SortedMembershipSet::new(&words);

    let mut queries = create_fake_words(&dictionary, 500, 6);
    queries.extend(words.iter().step_by(500).cloned());

    let assisted = Prefiltered::new(&bloom, &dictionary);
    for q in &queries {
        assert_eq!(dictionary.contains(q.as_str()), assisted.contains(q.as_str()));
    }
}

#[test]
fn sorted_set_finds_every_word() {
    let words = load_dictionary();
    let dictionary = SortedMembershipSet::new(&words);
    assert_eq!(words.len(), dictionary.size());
    assert!(words.iter().all(|w| dictionary.contains(w.as_str())));
    assert!(!dictionary.contains("asdfjkl"));
}
