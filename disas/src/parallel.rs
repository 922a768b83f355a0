use std::{
    io::{self, Write},
    sync::mpsc,
    thread,
};

use crate::App;

enum Message {
    Offset(usize),
    Print,
}

struct Parallel<'a> {
    app: &'a App<'a>,
    address: u64,
    data: &'a [u8],
}

impl<'a> Parallel<'a> {
    fn new(app: &'a App<'a>, address: u64, data: &'a [u8]) -> Self {
        Self { app, address, data }
    }

    /// Threads form a ring: a thread receives the offset of its next block, passes the end of
    /// that block on, decodes it and waits for its turn to print.
    fn disassemble_thread(
        &self,
        name: &str,
        rx: mpsc::Receiver<Message>,
        tx: mpsc::SyncSender<Message>,
    ) -> io::Result<usize> {
        let mut buffer = Vec::with_capacity(8 * 1024);
        let mut block_address = 0;
        let mut invalid = 0;
        let stdout = io::stdout();

        while let Ok(msg) = rx.recv() {
            match msg {
                Message::Offset(start) => {
                    if start >= self.data.len() {
                        debug!("{name}: end of code");
                        break;
                    }

                    let tail = &self.data[start..];
                    block_address = self.address + start as u64;
                    let block_size = self.app.threads_block_size;
                    let block_len = self.app.block_len(block_address, tail, block_size);

                    if tx.send(Message::Offset(start + block_len)).is_err() {
                        break;
                    }

                    debug!("{name}: {block_address:#x} disassemble {block_len} bytes");

                    buffer.clear();
                    let block = &tail[..block_len];
                    invalid += self.app.write_code(&mut buffer, block_address, block)?;
                }
                Message::Print => {
                    debug!("{name}: {block_address:#x} print {} bytes", buffer.len());

                    if let Err(err) = stdout.lock().write_all(&buffer) {
                        if err.kind() == io::ErrorKind::BrokenPipe {
                            break;
                        } else {
                            return Err(err);
                        }
                    }

                    if tx.send(Message::Print).is_err() {
                        break;
                    }
                }
            }
        }

        Ok(invalid)
    }

    fn disassemble_code(&self) -> io::Result<()> {
        let threads = self.app.threads;
        debug!("using {threads} threads, ~{} bytes per block", self.app.threads_block_size);

        let mut tx = Vec::with_capacity(threads);
        let mut rx = Vec::with_capacity(threads);
        for _ in 0..threads {
            let (t, r) = mpsc::sync_channel::<Message>(2);
            tx.push(t);
            rx.push(r);
        }

        // manually start first thread
        let first = tx.remove(0);
        let started = first
            .send(Message::Offset(0))
            .and_then(|_| first.send(Message::Print));
        if started.is_err() {
            return Err(io::Error::new(io::ErrorKind::Other, "failed to start threads"));
        }
        tx.push(first);

        let invalid = thread::scope(|s| {
            let handles: Vec<_> = rx
                .into_iter()
                .zip(tx)
                .enumerate()
                .map(|(id, (rx, tx))| {
                    s.spawn(move || {
                        let name = format!("thread#{id}");
                        self.disassemble_thread(&name, rx, tx)
                    })
                })
                .collect();

            let mut invalid = 0;
            for handle in handles {
                match handle.join() {
                    Ok(result) => invalid += result?,
                    Err(_) => return Err(io::Error::new(io::ErrorKind::Other, "thread panicked")),
                }
            }
            Ok(invalid)
        })?;

        if invalid != 0 {
            warn!("{invalid} bytes failed to decode");
        }
        Ok(())
    }
}

pub fn disassemble_code(app: &App, address: u64, data: &[u8]) -> io::Result<()> {
    Parallel::new(app, address, data).disassemble_code()
}
