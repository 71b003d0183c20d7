// End-to-end scenarios through the public API only.

use seq_collections::{
    Collection, Deque, DoublyLinkedList, Error, FixedArray, ImmutableArray, Map, PriorityQueue,
    Queue, Set, Stack,
};

#[test]
fn deque_ends() {
    let mut d = Deque::new();
    d.push_back(1);
    d.push_back(2);
    d.push_back(3);
    d.push_front(0);
    assert_eq!(d.to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(d[1], 1);
    assert_eq!(d.pop_front(), Ok(0));
    assert_eq!(d.pop_back(), Ok(3));
    assert_eq!(d.to_vec(), vec![1, 2]);
}

#[test]
fn deque_rotation_wraps() {
    let mut d: Deque<char> = "abcde".chars().collect();
    d.rotate(2);
    assert_eq!(d.iter().collect::<String>(), "cdeab");
    d.rotate(-3);
    assert_eq!(d.iter().collect::<String>(), "eabcd");
    d.rotate(10);
    assert_eq!(d.iter().collect::<String>(), "eabcd");
}

#[test]
fn priority_order() {
    let mut q = PriorityQueue::new();
    q.push("low", 1);
    q.push("high", 10);
    q.push("mid", 5);
    assert_eq!(q.pop(), Ok("high"));
    assert_eq!(q.pop(), Ok("mid"));
    assert_eq!(q.pop(), Ok("low"));
}

#[test]
fn priority_ties_are_fifo() {
    let mut q = PriorityQueue::new();
    q.push('A', 5);
    q.push('B', 5);
    assert_eq!(q.pop(), Ok('A'));
    assert_eq!(q.pop(), Ok('B'));
}

#[test]
fn map_overwrite_keeps_position() {
    let mut m = Map::new();
    m.put("a", 1);
    m.put("b", 2);
    m.put("a", 3);
    assert_eq!(m.keys().to_vec(), vec!["a", "b"]);
    assert_eq!(m.get(&"a"), Ok(&3));
}

#[test]
fn set_is_map_keys() {
    let s: Set<&str> = ["x", "y", "x", "z"].into_iter().collect();
    assert_eq!(s.to_vec(), vec!["x", "y", "z"]);
    assert_eq!(s.first(), Ok(&"x"));
    assert_eq!(s.last(), Ok(&"z"));
}

#[test]
fn empty_structures_underflow_and_stay_empty() {
    let mut stack: Stack<i32> = Stack::new();
    assert!(matches!(stack.pop(), Err(Error::Underflow { .. })));
    assert!(stack.is_empty());

    let mut queue: Queue<i32> = Queue::new();
    assert!(matches!(queue.pop(), Err(Error::Underflow { .. })));
    assert!(matches!(queue.peek(), Err(Error::Underflow { .. })));
    assert!(queue.is_empty());

    let mut deque: Deque<i32> = Deque::new();
    assert!(matches!(deque.pop_back(), Err(Error::Underflow { .. })));
    assert!(matches!(deque.pop_front(), Err(Error::Underflow { .. })));
    assert!(deque.is_empty());

    let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert!(matches!(list.pop_back(), Err(Error::Underflow { .. })));
    assert!(matches!(list.tail(), Err(Error::Underflow { .. })));

    let mut pq: PriorityQueue<i32> = PriorityQueue::new();
    assert!(matches!(pq.pop(), Err(Error::Underflow { .. })));
    assert!(pq.is_empty());
}

#[test]
fn round_trip_through_to_vec() {
    let v = vec![1, 2, 3];
    assert_eq!(FixedArray::from_vec(v.clone()).to_vec(), v);
    assert_eq!(ImmutableArray::from_vec(v.clone()).to_vec(), v);
    assert_eq!(Deque::from_vec(v.clone()).to_vec(), v);
    assert_eq!(DoublyLinkedList::from_vec(v.clone()).to_vec(), v);
    assert_eq!(Stack::from_vec(v.clone()).to_vec(), v);
    assert_eq!(Queue::from_vec(v.clone()).to_vec(), v);
}

#[test]
#[should_panic(expected = "out of range")]
fn list_index_past_end_panics() {
    let list = DoublyLinkedList::from_vec(vec![1]);
    let _ = list[1];
}

#[test]
fn capacity_grows_and_decays() {
    let mut d = Deque::new();
    for i in 0..9 {
        d.push_back(i);
    }
    assert_eq!(d.capacity(), 16);
    for _ in 0..7 {
        d.pop_back().unwrap();
    }
    assert_eq!(d.len(), 2);
    assert_eq!(d.capacity(), 8);

    let mut a = FixedArray::new();
    for i in 0..9 {
        a.push(i);
    }
    assert_eq!(a.capacity(), 12);
}

#[test]
fn destructive_iteration_empties_source() {
    let mut stack = Stack::from_vec(vec![1, 2, 3]);
    assert_eq!(stack.drain().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert!(stack.is_empty());

    let mut queue = Queue::from_vec(vec![1, 2, 3]);
    assert_eq!(queue.drain().take(2).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(queue.to_vec(), vec![3]);
}

#[test]
fn copies_do_not_alias() {
    let mut list = DoublyLinkedList::from_vec(vec![1, 2, 3]);
    let copy = list.clone();
    list.set(1, 20).unwrap();
    list[0] = 10;
    list.push_back(4);
    assert_eq!(list.to_vec(), vec![10, 20, 3, 4]);
    assert_eq!(copy.to_vec(), vec![1, 2, 3]);

    let mut q: PriorityQueue<i32> = [(1, 1), (2, 2)].into_iter().collect();
    let snapshot = q.clone();
    q.pop().unwrap();
    assert_eq!(snapshot.len(), 2);
}
