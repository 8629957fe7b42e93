//! Example: two authors editing one document concurrently.

use ot_kit::prelude::*;

fn main() -> Result<(), OtError> {
    println!("=== Concurrent Editing Session (OT) ===\n");

    let base = "hello";
    println!("Shared base document: {base:?}");

    // Alice and Bob edit the same snapshot without coordinating.
    let alice = Operation::insert(5, " world");
    let bob = Operation::insert(0, "say ");
    println!("Alice's edit: {alice}");
    println!("Bob's edit:   {bob}");

    // Each replica rebases the other author's operation before applying it.
    let (alice2, bob2) = transform(&alice, &bob);
    println!("\nAfter transform:");
    println!("  Alice's edit on Bob's replica:  {alice2}");
    println!("  Bob's edit on Alice's replica:  {bob2}");

    let alice_replica = apply(&apply(base, &alice)?, &bob2)?;
    let bob_replica = apply(&apply(base, &bob)?, &alice2)?;
    println!("\nAlice's replica: {alice_replica:?}");
    println!("Bob's replica:   {bob_replica:?}");
    assert_eq!(alice_replica, bob_replica);
    println!("Replicas converged.");

    // Concurrent deletes of overlapping ranges remove the union once.
    println!("\n--- Overlapping deletes ---");
    let doc = "abcdef";
    let left = Operation::delete(0, 4);
    let right = Operation::delete(2, 4);
    let (left2, right2) = transform(&left, &right);
    let one_order = apply(&apply(doc, &left)?, &right2)?;
    let other_order = apply(&apply(doc, &right)?, &left2)?;
    println!("{doc:?} minus [0,4) and [2,4) in either order: {one_order:?}");
    assert_eq!(one_order, other_order);

    // Rapid local keystrokes coalesce before transmission.
    println!("\n--- Keystroke coalescing ---");
    let burst = [
        Operation::insert(0, "t"),
        Operation::insert(1, "y"),
        Operation::insert(2, "p"),
        Operation::insert(3, "i"),
        Operation::insert(4, "n"),
        Operation::insert(5, "g"),
    ];
    let composed = compose(&burst);
    println!("{} keystrokes compose to {} operation:", burst.len(), composed.len());
    for op in &composed {
        println!("  {op}");
    }

    Ok(())
}
