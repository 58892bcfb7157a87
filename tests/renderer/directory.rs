//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use std::fs;
    use std::path::Path;

    use unmht::core::{convert_mhtml_document, UnmhtOptions};
    use unmht::storage::BlobDirectoryStore;

    use crate::common::{mhtml_archive, TestPart};

    const JPEG_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0fake-jpeg-bytes";

    fn convert_into(directory: &Path, input: &[u8]) -> String {
        let options = UnmhtOptions {
            silent: true,
            ..Default::default()
        };
        let store = BlobDirectoryStore::new(directory);
        let result = convert_mhtml_document(&options, &store, input).unwrap();
        String::from_utf8(result).unwrap()
    }

    fn blob_files(directory: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(directory)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .filter(|name| name.starts_with("blob="))
            .collect();
        names.sort();
        names
    }

    fn image_archive() -> Vec<u8> {
        mhtml_archive(
            Some("<root>"),
            &[
                TestPart::text(
                    "text/html",
                    "<html><body><img src=\"cid:image1\"></body></html>",
                )
                .id("<root>"),
                TestPart::binary("image/jpeg", JPEG_BYTES).id("<image1>"),
            ],
        )
    }

    #[test]
    fn blob_named_by_digest_and_extension() {
        let directory = tempfile::tempdir().unwrap();

        let output = convert_into(directory.path(), &image_archive());

        let blobs = blob_files(directory.path());
        assert_eq!(blobs.len(), 1);
        assert!(blobs[0].ends_with(".jpg"));
        // Rewritten reference points at the blob by its relative name
        assert!(output.contains(&format!("src=\"{}\"", blobs[0])));
        // The blob holds exactly the part's payload
        assert_eq!(fs::read(directory.path().join(&blobs[0])).unwrap(), JPEG_BYTES);
    }

    #[test]
    fn repeated_reference_written_once() {
        let directory = tempfile::tempdir().unwrap();
        let input = mhtml_archive(
            Some("<root>"),
            &[
                TestPart::text(
                    "text/html",
                    "<html><body>\
                     <img src=\"cid:image1\"><img src=\"cid:image1\">\
                     </body></html>",
                )
                .id("<root>"),
                TestPart::binary("image/jpeg", JPEG_BYTES).id("<image1>"),
            ],
        );

        let output = convert_into(directory.path(), &input);

        let blobs = blob_files(directory.path());
        assert_eq!(blobs.len(), 1);
        assert_eq!(output.matches(&blobs[0]).count(), 2);
    }

    #[test]
    fn identical_content_shared_across_conversions() {
        let directory = tempfile::tempdir().unwrap();

        convert_into(directory.path(), &image_archive());
        convert_into(directory.path(), &image_archive());

        assert_eq!(blob_files(directory.path()).len(), 1);
    }

    #[test]
    fn cycle_answers_with_blob_path_without_rerendering() {
        let directory = tempfile::tempdir().unwrap();
        let input = mhtml_archive(
            None,
            &[
                TestPart::text(
                    "text/html",
                    "<html><body><iframe src=\"b.html\"></iframe></body></html>",
                )
                .location("http://example.com/a.html"),
                TestPart::text(
                    "text/html",
                    "<html><body><iframe src=\"a.html\"></iframe></body></html>",
                )
                .location("http://example.com/b.html"),
            ],
        );

        let output = convert_into(directory.path(), &input);

        // Only B is externalized; its nested reference back to the root gets
        // the root's deterministic blob name instead of a re-render
        let blobs = blob_files(directory.path());
        assert_eq!(blobs.len(), 1);
        assert!(blobs[0].ends_with(".html"));
        assert!(output.contains(&blobs[0]));

        let nested = fs::read_to_string(directory.path().join(&blobs[0])).unwrap();
        assert!(nested.contains("src=\"blob="));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use std::path::Path;

    use unmht::core::{convert_mhtml_document, UnmhtOptions};
    use unmht::storage::BlobDirectoryStore;

    use crate::common::{mhtml_archive, TestPart};

    #[test]
    fn unwritable_directory_aborts_conversion() {
        let input = mhtml_archive(
            Some("<root>"),
            &[
                TestPart::text(
                    "text/html",
                    "<html><body><img src=\"cid:image1\"></body></html>",
                )
                .id("<root>"),
                TestPart::binary("image/jpeg", b"\xFF\xD8\xFFdata").id("<image1>"),
            ],
        );
        let options = UnmhtOptions {
            silent: true,
            ..Default::default()
        };
        let store = BlobDirectoryStore::new(Path::new("/nonexistent/blob/directory"));

        let result = convert_mhtml_document(&options, &store, &input);

        assert!(result.is_err());
    }
}
