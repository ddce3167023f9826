mod common;

#[cfg(test)]
mod tests {
    use super::common::{png_bytes, u32_at, write_icon_png};
    use pack_ico::{IconPacker, PackError};

    #[test]
    fn test_pack_layout_matches_format() {
        let dir = tempfile::tempdir().unwrap();
        let p32 = write_icon_png(dir.path(), 32, &[0xaa; 300]);
        let p16 = write_icon_png(dir.path(), 16, &[0x55; 100]);
        let out = dir.path().join("app.ico");

        IconPacker::new(&out).inputs([&p32, &p16]).pack().unwrap();
        let bytes = std::fs::read(&out).unwrap();

        let n16 = png_bytes(16, &[0x55; 100]);
        let n32 = png_bytes(32, &[0xaa; 300]);

        assert_eq!(bytes.len(), 6 + 32 + n16.len() + n32.len());
        assert_eq!(&bytes[..6], &[0, 0, 1, 0, 2, 0]);

        // entry 0: 16px
        assert_eq!(&bytes[6..14], &[16, 16, 0, 0, 1, 0, 32, 0]);
        assert_eq!(u32_at(&bytes, 14) as usize, n16.len());
        assert_eq!(u32_at(&bytes, 18), 38);

        // entry 1: 32px
        assert_eq!(&bytes[22..30], &[32, 32, 0, 0, 1, 0, 32, 0]);
        assert_eq!(u32_at(&bytes, 30) as usize, n32.len());
        assert_eq!(u32_at(&bytes, 34) as usize, 38 + n16.len());

        assert_eq!(&bytes[38..38 + n16.len()], n16.as_slice());
        assert_eq!(&bytes[38 + n16.len()..], n32.as_slice());
    }

    #[test]
    fn test_output_readable_by_ico_crate() {
        let dir = tempfile::tempdir().unwrap();
        let inputs: Vec<_> = [256, 48, 16, 32]
            .iter()
            .map(|&size| write_icon_png(dir.path(), size, b"pixels"))
            .collect();
        let out = dir.path().join("app.ico");

        IconPacker::new(&out).inputs(&inputs).pack().unwrap();

        let file = std::fs::File::open(&out).unwrap();
        let icon_dir = ico::IconDir::read(file).unwrap();
        assert_eq!(icon_dir.resource_type(), ico::ResourceType::Icon);

        let entries = icon_dir.entries();
        let sizes: Vec<u32> = entries.iter().map(|e| e.width()).collect();
        assert_eq!(sizes, vec![16, 32, 48, 256]);
        for entry in entries {
            assert!(entry.is_png());
            assert_eq!(entry.bits_per_pixel(), 32);
            assert_eq!(entry.data(), png_bytes(entry.width(), b"pixels").as_slice());
        }
    }

    #[test]
    fn test_large_sizes_store_zero_dimension() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = [
            write_icon_png(dir.path(), 255, b""),
            write_icon_png(dir.path(), 256, b""),
            write_icon_png(dir.path(), 512, b""),
        ];
        let out = dir.path().join("big.ico");

        let report = IconPacker::new(&out).inputs(&inputs).pack().unwrap();
        let bytes = std::fs::read(&out).unwrap();

        assert_eq!(report.entries.len(), 3);
        assert_eq!(&bytes[6..8], &[255, 255]);
        assert_eq!(&bytes[22..24], &[0, 0]);
        assert_eq!(&bytes[38..40], &[0, 0]);
    }

    #[test]
    fn test_unparsable_name_produces_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_icon_png(dir.path(), 16, b"");
        let bad = dir.path().join("icon.png");
        std::fs::write(&bad, png_bytes(32, b"")).unwrap();
        let out = dir.path().join("app.ico");

        let err = IconPacker::new(&out).inputs([&good, &bad]).pack().unwrap_err();
        assert!(matches!(err, PackError::Format { .. }));
        assert!(err.to_string().contains("icon.png"));
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_input_produces_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_icon_png(dir.path(), 16, b"");
        let missing = dir.path().join("32x32.png");
        let out = dir.path().join("app.ico");

        let err = IconPacker::new(&out).inputs([&good, &missing]).pack().unwrap_err();
        assert!(matches!(err, PackError::Fs { .. }));
        assert!(err.to_string().contains("32x32.png"));
        assert!(!out.exists());
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let dir = tempfile::tempdir().unwrap();
        let p16 = write_icon_png(dir.path(), 16, b"a");
        let p32 = write_icon_png(dir.path(), 32, b"b");
        let before = (std::fs::read(&p16).unwrap(), std::fs::read(&p32).unwrap());

        IconPacker::new(dir.path().join("app.ico"))
            .inputs([&p16, &p32])
            .pack()
            .unwrap();

        assert_eq!(std::fs::read(&p16).unwrap(), before.0);
        assert_eq!(std::fs::read(&p32).unwrap(), before.1);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
    }
}
