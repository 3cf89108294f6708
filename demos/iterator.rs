use prefixset::trie::TrieString;
use rand::{distributions::Alphanumeric, thread_rng, Rng};

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our trie and a collection of searches
    let mut trie = TrieString::new();
    let mut searches = vec![];

    // Store 10 random strings (char sequences)
    // composed of between 1 and 10 characters in
    // our search collection and our trie.
    for _i in 0..POPULATION_SIZE {
        let entry: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(thread_rng().gen_range(1..=SIZE))
            .map(char::from)
            .collect();
        trie.insert(entry.chars());
        searches.push(entry);
    }

    // iterate over the trie and confirm that every key is in our search
    // collection, and that the keys come out sorted
    searches.sort_unstable();
    searches.dedup();
    for (key, expected) in trie.iter().zip(&searches) {
        let key = String::from_iter(key);
        assert_eq!(&key, expected);
        println!("key: {}", key);
    }
    assert_eq!(trie.len(), searches.len());
}
