// msgqueue/tests/channel_tests.rs
//
// Tests de integración del canal bloqueante con hilos reales.
//
// Ejecutar con: cargo test -p msgqueue -- --nocapture

use msgqueue::{BlockingChannel, SendError};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_fifo_order_single_producer() {
    // Qué valida: con un solo productor y un solo consumidor, el orden
    // de salida es exactamente el orden de entrada.
    let chan = BlockingChannel::new();

    for i in 0..100 {
        chan.send(i).unwrap();
    }
    for i in 0..100 {
        assert_eq!(chan.receive(), Some(i), "orden FIFO roto en el item {}", i);
    }

    assert!(chan.is_empty());
    println!("✓ orden FIFO preservado para 100 items");
}

#[test]
fn test_receive_blocks_until_send() {
    // Qué valida: receive sobre canal vacío suspende al hilo y despierta
    // con el valor exacto que mandó el otro hilo.
    let chan = Arc::new(BlockingChannel::new());
    let chan_rx = Arc::clone(&chan);

    let receiver = thread::spawn(move || {
        let started = Instant::now();
        let value = chan_rx.receive();
        (value, started.elapsed())
    });

    thread::sleep(Duration::from_millis(100));
    chan.send(42).unwrap();

    let (value, waited) = receiver.join().unwrap();
    assert_eq!(value, Some(42));
    assert!(
        waited >= Duration::from_millis(50),
        "receive no bloqueó: esperó solo {:?}",
        waited
    );
    println!("✓ receive bloqueó {:?} hasta el send", waited);
}

#[test]
fn test_each_item_delivered_exactly_once() {
    // Qué valida: con varios receptores concurrentes, cada item lo
    // obtiene exactamente uno (sin duplicados ni pérdidas).
    const RECEIVERS: usize = 4;
    const ITEMS: usize = 200;

    let chan = Arc::new(BlockingChannel::new());
    let mut handles = Vec::new();

    for _ in 0..RECEIVERS {
        let chan = Arc::clone(&chan);
        handles.push(thread::spawn(move || {
            let mut got = Vec::new();
            while let Some(v) = chan.receive() {
                got.push(v);
            }
            got
        }));
    }

    for i in 0..ITEMS {
        chan.send(i).unwrap();
    }

    // dejar que los receptores drenen todo antes de cerrar
    while !chan.is_empty() {
        thread::sleep(Duration::from_millis(1));
    }
    chan.close();

    let mut seen = HashSet::new();
    let mut total = 0;
    for handle in handles {
        for v in handle.join().unwrap() {
            assert!(seen.insert(v), "item {} entregado dos veces", v);
            total += 1;
        }
    }
    assert_eq!(total, ITEMS, "se perdieron items");
    println!(
        "✓ {} items repartidos exactamente una vez entre {} receptores",
        total, RECEIVERS
    );
}

#[test]
fn test_close_drains_pending_items() {
    // Qué valida: cerrar no descarta lo ya encolado; recién después
    // del drenado receive devuelve None.
    let chan = BlockingChannel::new();
    chan.send("rojo").unwrap();
    chan.send("verde").unwrap();
    chan.close();

    assert_eq!(chan.receive(), Some("rojo"));
    assert_eq!(chan.receive(), Some("verde"));
    assert_eq!(chan.receive(), None);
    println!("✓ close drena los items pendientes en orden");
}

#[test]
fn test_send_after_close_hands_value_back() {
    let chan = BlockingChannel::new();
    chan.close();
    assert_eq!(chan.send(7), Err(SendError(7)));
}

#[test]
fn test_close_wakes_all_blocked_receivers() {
    // Qué valida: los receptores suspendidos despiertan con None al
    // cerrarse el canal, en lugar de quedar colgados para siempre.
    let chan = Arc::new(BlockingChannel::<u32>::new());

    let mut handles = Vec::new();
    for _ in 0..3 {
        let chan = Arc::clone(&chan);
        handles.push(thread::spawn(move || chan.receive()));
    }

    thread::sleep(Duration::from_millis(50));
    chan.close();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), None);
    }
    println!("✓ close despertó a los 3 receptores bloqueados");
}
