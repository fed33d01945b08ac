//! CLI command implementations: guided walkthroughs of each structure.

use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::graph::Graph;
use crate::hash::HashTable;
use crate::sequence::{Array, LinkedList};
use crate::stack::{ArrayStack, LinkedStack};
use crate::types::PrimerResult;

/// Which graph walkthrough to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphDemo {
    Undirected,
    Directed,
    Weighted,
    All,
}

impl GraphDemo {
    /// Parse a demo name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "undirected" => Some(Self::Undirected),
            "directed" => Some(Self::Directed),
            "weighted" => Some(Self::Weighted),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    fn includes(self, other: GraphDemo) -> bool {
        self == GraphDemo::All || self == other
    }
}

/// Stack implementation to exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackVariant {
    Array,
    Linked,
}

impl StackVariant {
    /// Parse a variant name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "array" => Some(Self::Array),
            "linked" | "linkedlist" | "linked_list" => Some(Self::Linked),
            _ => None,
        }
    }
}

/// Build and display the graph walkthroughs.
pub fn cmd_graph(demo: GraphDemo, json: bool) -> PrimerResult<()> {
    let mut reports = Vec::new();

    if demo.includes(GraphDemo::Undirected) {
        let mut graph: Graph<&str> = Graph::undirected();
        for vertex in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(vertex);
        }
        for (v1, v2) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")] {
            graph.add_edge(v1, v2, None);
        }
        if json {
            reports.push(graph_report("undirected", &graph));
        } else {
            println!("Undirected graph:");
            println!("{}", graph);
            println!("Neighbors of D: {}", join(graph.get_neighbors("D")));
            println!();
        }
    }

    if demo.includes(GraphDemo::Directed) {
        let mut graph: Graph<i32> = Graph::directed();
        for (v1, v2) in [(1, 2), (1, 3), (2, 4), (3, 2)] {
            graph.add_edge(v1, v2, None);
        }
        if json {
            reports.push(graph_report("directed", &graph));
        } else {
            println!("Directed graph:");
            println!("{}", graph);
            println!();
        }
    }

    if demo.includes(GraphDemo::Weighted) {
        let mut graph: Graph<&str> = Graph::undirected();
        for (v1, v2, w) in [
            ("A", "B", 5.0),
            ("A", "C", 3.0),
            ("B", "C", 2.0),
            ("B", "D", 6.0),
            ("C", "D", 7.0),
        ] {
            graph.add_edge(v1, v2, Some(w));
        }
        if json {
            reports.push(graph_report("weighted", &graph));
        } else {
            println!("Weighted graph:");
            println!("{}", graph);
            println!("All edges:");
            for edge in graph.get_edges() {
                println!("  {}", edge);
            }
        }

        graph.remove_edge("A", "B");
        graph.remove_vertex("C");
        if json {
            reports.push(graph_report("weighted_after_removal", &graph));
        } else {
            println!("After removing edge (A, B) and vertex C:");
            println!("{}", graph);
        }
    }

    if json {
        print_json(&serde_json::Value::Array(reports));
    }
    Ok(())
}

/// Walk through the dynamic array operations.
pub fn cmd_array(json: bool) -> PrimerResult<()> {
    let mut array = Array::new();
    for item in ["apple", "banana", "cherry", "date"] {
        array.push(item);
    }
    let first = *array.get(0)?;
    let third = *array.get(2)?;
    let banana = array.search(&"banana");
    let grape = array.search(&"grape");
    array.insert(2, "blueberry")?;
    let deleted = array.delete(1)?;
    let popped = array.pop()?;

    if json {
        print_json(&serde_json::json!({
            "get_0": first,
            "get_2": third,
            "search_banana": banana,
            "search_grape": grape,
            "deleted": deleted,
            "popped": popped,
            "final": array.iter().collect::<Vec<_>>(),
            "length": array.len(),
        }));
    } else {
        println!("Element at index 0: {}", first);
        println!("Element at index 2: {}", third);
        println!("'banana' found at index: {}", format_position(banana));
        println!("'grape' found at index: {}", format_position(grape));
        println!("Deleted element: {}", deleted);
        println!("Popped element: {}", popped);
        println!("Array: {} (length {})", array, array.len());
    }
    Ok(())
}

/// Walk through the hash table operations.
pub fn cmd_hash_table(buckets: usize, json: bool) -> PrimerResult<()> {
    let mut table = HashTable::with_buckets(buckets)?;
    table.insert("name", "Alice".to_string());
    table.insert("age", "25".to_string());
    table.insert("city", "New York".to_string());
    table.insert("age", "26".to_string());
    table.insert("country", "USA".to_string());
    table.insert("language", "English".to_string());

    let has_name = table.contains(&"name");
    let has_email = table.contains(&"email");
    let age = table.get(&"age")?.clone();
    table.delete(&"city")?;
    let missing = table.get(&"address").err();

    if json {
        let pairs: serde_json::Map<String, serde_json::Value> = table
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(v.as_str())))
            .collect();
        print_json(&serde_json::json!({
            "buckets": table.bucket_count(),
            "age": age,
            "contains_name": has_name,
            "contains_email": has_email,
            "missing_key_error": missing.map(|e| e.to_string()),
            "entries": pairs,
        }));
    } else {
        println!("Updated age: {}", age);
        println!("Contains 'name': {}", has_name);
        println!("Contains 'email': {}", has_email);
        if let Some(e) = missing {
            println!("Looking up 'address': {}", e);
        }
        println!("{} ({} buckets)", table, table.bucket_count());
    }
    Ok(())
}

/// Walk through the linked list operations.
pub fn cmd_linked_list(json: bool) -> PrimerResult<()> {
    let mut list = LinkedList::new();
    list.append("apple");
    list.append("banana");
    list.prepend("orange");
    list.insert(2, "grape")?;
    let second = *list.lookup(1)?;
    let banana = list.find(&"banana");
    let mango = list.find(&"mango");
    let popped = list.pop()?;
    let popped_first = list.pop_first()?;
    list.reverse();
    let reversed = list.to_vec();
    list.extend(["cherry", "date", "elderberry"]);
    let extended = list.to_vec();
    list.clear();

    if json {
        print_json(&serde_json::json!({
            "lookup_1": second,
            "find_banana": banana,
            "find_mango": mango,
            "popped": popped,
            "popped_first": popped_first,
            "reversed": reversed,
            "extended": extended,
            "cleared_is_empty": list.is_empty(),
        }));
    } else {
        println!("Element at index 1: {}", second);
        println!("Index of 'banana': {}", format_position(banana));
        println!("Index of 'mango': {}", format_position(mango));
        println!("Popped from end: {}", popped);
        println!("Popped from beginning: {}", popped_first);
        println!("Reversed: [{}]", reversed.join(", "));
        println!("After extending: [{}]", extended.join(", "));
        println!("After clearing: {} (empty: {})", list, list.is_empty());
    }
    Ok(())
}

/// Walk through push, peek and pop on the chosen stack variant.
pub fn cmd_stack(variant: StackVariant, json: bool) -> PrimerResult<()> {
    let items = ["10", "20", "30"];
    let (after_push, peeked, popped, empty) = match variant {
        StackVariant::Array => {
            let mut stack = ArrayStack::new();
            for item in items {
                stack.push(item);
            }
            let after_push = stack.to_string();
            let peeked = stack.peek().copied();
            let popped = drain(|| stack.pop())?;
            (after_push, peeked, popped, stack.is_empty())
        }
        StackVariant::Linked => {
            let mut stack = LinkedStack::new();
            for item in items {
                stack.push(item);
            }
            let after_push = stack.to_string();
            let peeked = Some(*stack.peek()?);
            let popped = drain(|| stack.pop())?;
            (after_push, peeked, popped, stack.is_empty())
        }
    };

    if json {
        print_json(&serde_json::json!({
            "stack": after_push,
            "peek": peeked,
            "popped": popped,
            "is_empty": empty,
        }));
    } else {
        println!("Stack after pushing: {}", after_push);
        println!("Top element (peek): {}", peeked.unwrap_or("none"));
        println!("Popped in order: {}", popped.join(", "));
        println!("Is stack empty? {}", empty);
    }
    Ok(())
}

/// Pop three times, the way the walkthrough empties the stack.
fn drain<'a, F>(mut pop: F) -> PrimerResult<Vec<&'a str>>
where
    F: FnMut() -> PrimerResult<&'a str>,
{
    (0..3).map(|_| pop()).collect()
}

fn graph_report<V, W>(name: &str, graph: &Graph<V, W>) -> serde_json::Value
where
    V: Serialize + Clone + Eq + Hash,
    W: Serialize + Clone + PartialEq,
{
    serde_json::json!({
        "name": name,
        "directed": graph.is_directed(),
        "vertices": graph.get_vertices(),
        "edges": graph.get_edges(),
    })
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn format_position(position: Option<usize>) -> String {
    match position {
        Some(i) => i.to_string(),
        None => "-1".to_string(),
    }
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}
