//! Connection staging walkthrough: one ring buffer per connection, one
//! list of client records per server.
//!
//! Run with:
//!     cargo run --example staging

use ringstage::{LinkedList, RingBuffer, StageError};

#[derive(Debug)]
struct Client {
    addr: String,
    fd: i32,
}

fn main() -> Result<(), StageError> {
    // The registry a server loop would iterate over
    let mut clients = LinkedList::new();
    clients.push_back(Client {
        addr: "127.0.0.1:56001".into(),
        fd: 4,
    });
    clients.push_back(Client {
        addr: "127.0.0.1:56002".into(),
        fd: 7,
    });

    println!("{} clients connected:", clients.len());
    for client in &clients {
        println!("  fd {} at {}", client.fd, client.addr);
    }

    // Stage inbound bytes for one connection through a small arena
    let mut arena = [0u8; 64];
    let mut inbound = RingBuffer::new(&mut arena)?;

    inbound.bulk_push(b"PING vessel")?;
    println!(
        "\nstaged {} of {} bytes for fd 4",
        inbound.len(),
        inbound.capacity()
    );

    // Hand the payload to application logic as owned bytes
    let request = inbound.pop_bytes(inbound.len());
    println!("application sees: {:?}", String::from_utf8_lossy(&request));

    // A disconnect unlinks the record by descriptor
    if let Some(gone) = clients.remove_first(|c| c.fd == 7) {
        println!("\nfd {} at {} disconnected", gone.fd, gone.addr);
    }
    println!("{} client remains", clients.len());

    Ok(())
}
