use prefixset::trie::TrieString;

const WORDS: &str = "banana band mango apple mandolin grape bean fruit \
                     bandana banner mangrove grapefruit beans";

fn main() {
    let mut trie = TrieString::from_keys(WORDS.split_whitespace().map(str::chars));
    println!("{} words", trie.len());

    for prefix in ["b", "ban", "man", "grape", "z"] {
        let completions: Vec<String> = trie.get_all_with_prefix(prefix.chars());
        println!(
            "{:>6}: {} match(es) {:?}",
            prefix,
            trie.count_prefix(prefix.chars()),
            completions
        );
    }

    trie.remove("bandana".chars());
    trie.remove("bandana".chars());
    println!("after removing bandana: {:?}", trie.get_all_with_prefix::<String, _>("ban".chars()));
}
