use avl_console::AvlTree;

fn main() {
    let mut tree = AvlTree::new();
    for key in [4, 2, 6, 1, 3, 5, 7] {
        tree.insert(key);
    }

    println!("Level-order traversal:");
    for (depth, level) in tree.levels().enumerate() {
        for (key, balance) in level {
            println!("Depth: {depth}, Key: {key}, Balance: {balance}");
        }
    }
}
