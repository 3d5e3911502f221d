//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;

/// Serve exactly one HTTP response on a fresh local port, returning the
/// base URL. The responder thread exits after the first request.
pub fn serve_one(status_line: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let header = format!(
                "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
        }
    });

    format!("http://{addr}")
}

/// Build an in-memory zip archive from directory entries `(name, mode)`
/// and file entries `(name, bytes, mode)`.
pub fn build_zip(dirs: &[(&str, u32)], files: &[(&str, &[u8], u32)]) -> Vec<u8> {
    let mut buf = std::io::Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buf);

        for (name, mode) in dirs {
            let options = zip::write::SimpleFileOptions::default().unix_permissions(*mode);
            zip.add_directory(*name, options)
                .expect("directory entry should be added");
        }
        for (name, bytes, mode) in files {
            let options = zip::write::SimpleFileOptions::default().unix_permissions(*mode);
            zip.start_file(*name, options)
                .expect("file entry should start");
            zip.write_all(bytes).expect("file entry should write");
        }

        zip.finish().expect("zip should finish");
    }
    buf.into_inner()
}
