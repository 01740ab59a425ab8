use yaqp::Trie;

fn main() {
    let mut trie = Trie::<String, String>::default();
    for word in ["hello", "hellp", "hellpl", "apple", "arnold", "butter", "buttercup"] {
        trie.set(word.to_string(), word.to_uppercase());
    }
    trie.delete("hellpl");
    print!("{trie:?}");
}
