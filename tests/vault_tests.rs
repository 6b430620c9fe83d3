//! Integration tests for the SafeZone vault module.

use std::fs;

use safezone::errors::SafeZoneError;
use safezone::vault::layout::record_path;
use safezone::vault::{
    decode_record, encode_record, Provisioning, Record, VaultPaths, VaultStore, DIGEST_FILE_NAME,
};
use tempfile::TempDir;

const KEY: [u8; 32] = [0x3C; 32];

/// Helper: a temp home for the key file and a separate "mounted drive".
struct Fixture {
    _home: TempDir,
    _drive: TempDir,
    paths: VaultPaths,
}

fn fixture() -> Fixture {
    let home = TempDir::new().expect("create home dir");
    let drive = TempDir::new().expect("create drive dir");
    let paths = VaultPaths::new(home.path().join(".keys"), drive.path());
    Fixture {
        _home: home,
        _drive: drive,
        paths,
    }
}

// ---------------------------------------------------------------------------
// Record codec
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_recovers_plaintext() {
    let cases = [
        "alice:s3cret",
        "line1\nline2\n",
        "no separator here",
        "unicode: ünïcødé 🔐",
        "exactly sixteen!",
        "a much longer note that spans several cipher blocks\nand two lines\n",
        "no trailing newline\nafter the last line",
        "windows\r\nline endings\r\n",
        "\n",
    ];

    for plaintext in cases {
        let ciphertext = encode_record(plaintext, &KEY).unwrap();
        assert_eq!(ciphertext.len() % 16, 0);
        let record = decode_record(&ciphertext, &KEY).unwrap();
        assert_eq!(record.to_plaintext(), plaintext, "round trip of {plaintext:?}");
    }
}

#[test]
fn credential_shape_is_recovered() {
    let ciphertext = encode_record("alice:s3cret", &KEY).unwrap();
    assert_eq!(
        decode_record(&ciphertext, &KEY).unwrap(),
        Record::Credential {
            user: "alice".into(),
            password: "s3cret".into()
        }
    );
}

#[test]
fn note_shape_is_recovered() {
    let ciphertext = encode_record("line1\nline2\n", &KEY).unwrap();
    assert_eq!(
        decode_record(&ciphertext, &KEY).unwrap(),
        Record::Note {
            text: "line1\nline2\n".into()
        }
    );
}

#[test]
fn single_line_with_one_colon_reads_back_as_credential() {
    // Known ambiguity: no shape tag is stored.
    let ciphertext = encode_record("Meeting: 3pm", &KEY).unwrap();
    assert_eq!(
        decode_record(&ciphertext, &KEY).unwrap(),
        Record::Credential {
            user: "Meeting".into(),
            password: " 3pm".into()
        }
    );
}

#[test]
fn built_note_with_one_colon_stays_a_note() {
    let note = Record::note(["Meeting: 3pm"]).unwrap();
    let ciphertext = note.encode(&KEY).unwrap();
    assert_eq!(decode_record(&ciphertext, &KEY).unwrap(), note);
}

#[test]
fn empty_ciphertext_is_empty_record() {
    assert_eq!(decode_record(&[], &KEY).unwrap(), Record::Empty);
}

#[test]
fn unaligned_ciphertext_is_rejected() {
    assert!(matches!(
        decode_record(&[1u8; 15], &KEY),
        Err(SafeZoneError::UnalignedInput(15))
    ));
}

#[test]
fn non_text_plaintext_is_decryption_failure() {
    // Encrypt bytes that are not UTF-8, then decode as a record.
    let ciphertext = safezone::crypto::encrypt_blocks(&KEY, &[0xFF; 16]).unwrap();
    assert!(matches!(
        decode_record(&ciphertext, &KEY),
        Err(SafeZoneError::DecryptionFailed)
    ));
}

// ---------------------------------------------------------------------------
// VaultStore: startup gate
// ---------------------------------------------------------------------------

#[test]
fn first_open_generates_then_verifies() {
    let fx = fixture();

    let (_store, provisioning) = VaultStore::open(&fx.paths).unwrap();
    assert_eq!(provisioning, Provisioning::Generated);
    assert!(fx.paths.keys_file.exists());
    assert!(fx.paths.digest_file().exists());

    let (_store, provisioning) = VaultStore::open(&fx.paths).unwrap();
    assert_eq!(provisioning, Provisioning::Verified);
}

#[test]
fn missing_vault_dir_is_not_created() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("not-mounted");
    let paths = VaultPaths::new(home.path().join(".keys"), &missing);

    assert!(matches!(
        VaultStore::open(&paths),
        Err(SafeZoneError::VaultDirMissing(_))
    ));
    assert!(!missing.exists());
    assert!(!paths.keys_file.exists());
}

#[test]
fn partial_key_material_is_never_repaired() {
    let fx = fixture();
    VaultStore::open(&fx.paths).unwrap();
    fs::remove_file(fx.paths.digest_file()).unwrap();
    let keys_before = fs::read(&fx.paths.keys_file).unwrap();

    assert!(matches!(
        VaultStore::open(&fx.paths),
        Err(SafeZoneError::PartialKeyMaterial { .. })
    ));

    // Nothing was regenerated behind the user's back.
    assert!(!fx.paths.digest_file().exists());
    assert_eq!(fs::read(&fx.paths.keys_file).unwrap(), keys_before);
}

#[test]
fn tampered_digest_blocks_open() {
    let fx = fixture();
    VaultStore::open(&fx.paths).unwrap();

    let mut digests = fs::read(fx.paths.digest_file()).unwrap();
    digests[0] = if digests[0] == b'0' { b'1' } else { b'0' };
    fs::write(fx.paths.digest_file(), digests).unwrap();

    assert!(matches!(
        VaultStore::open(&fx.paths),
        Err(SafeZoneError::IntegrityMismatch { .. })
    ));
}

// ---------------------------------------------------------------------------
// VaultStore: records
// ---------------------------------------------------------------------------

#[test]
fn scenario_generate_verify_write_read() {
    let fx = fixture();

    // Generate, then verify.
    VaultStore::open(&fx.paths).unwrap();
    let (store, provisioning) = VaultStore::open(&fx.paths).unwrap();
    assert_eq!(provisioning, Provisioning::Verified);

    // Encode under the first key and write to a record file.
    let record = Record::credential("bob", "hunter2").unwrap();
    store.write_record("work", &record, false).unwrap();

    let on_disk = fs::read(record_path(&fx.paths.vault_dir, "work")).unwrap();
    let expected = encode_record("bob:hunter2", store.bundle().primary().as_bytes()).unwrap();
    assert_eq!(on_disk, expected);

    // Read back and decode.
    assert_eq!(
        store.read_record("work").unwrap(),
        Record::Credential {
            user: "bob".into(),
            password: "hunter2".into()
        }
    );
}

#[test]
fn records_survive_reopen() {
    let fx = fixture();
    let (store, _) = VaultStore::open(&fx.paths).unwrap();
    let note = Record::note(["first line", "second: line", ""]).unwrap();
    store.write_record("notes", &note, false).unwrap();
    drop(store);

    let (store, _) = VaultStore::open(&fx.paths).unwrap();
    assert_eq!(
        store.read_record("notes").unwrap(),
        Record::Note {
            text: "first line\nsecond: line\n\n".into()
        }
    );
}

#[test]
fn zero_byte_record_file_is_empty() {
    let fx = fixture();
    let (store, _) = VaultStore::open(&fx.paths).unwrap();
    fs::write(record_path(&fx.paths.vault_dir, "blank"), b"").unwrap();

    assert_eq!(store.read_record("blank").unwrap(), Record::Empty);
}

#[test]
fn write_refuses_to_clobber_without_overwrite() {
    let fx = fixture();
    let (store, _) = VaultStore::open(&fx.paths).unwrap();
    let first = Record::credential("a", "1").unwrap();
    let second = Record::credential("b", "2").unwrap();

    store.write_record("site", &first, false).unwrap();
    assert!(matches!(
        store.write_record("site", &second, false),
        Err(SafeZoneError::RecordAlreadyExists(_))
    ));
    assert_eq!(store.read_record("site").unwrap(), first);

    store.write_record("site", &second, true).unwrap();
    assert_eq!(store.read_record("site").unwrap(), second);
}

#[test]
fn reserved_and_unsafe_labels_are_rejected() {
    let fx = fixture();
    let (store, _) = VaultStore::open(&fx.paths).unwrap();
    let record = Record::credential("a", "b").unwrap();

    for label in ["master", "", "../escape", ".hidden"] {
        assert!(matches!(
            store.write_record(label, &record, true),
            Err(SafeZoneError::InvalidLabel(_))
        ));
    }

    // The digest file is untouched.
    let (_store, provisioning) = VaultStore::open(&fx.paths).unwrap();
    assert_eq!(provisioning, Provisioning::Verified);
}

#[test]
fn list_excludes_digest_artifact() {
    let fx = fixture();
    let (store, _) = VaultStore::open(&fx.paths).unwrap();
    assert!(fx.paths.vault_dir.join(DIGEST_FILE_NAME).exists());
    assert!(store.list_records().unwrap().is_empty());

    store
        .write_record("zeta", &Record::credential("z", "z").unwrap(), false)
        .unwrap();
    store
        .write_record("alpha", &Record::note(["a"]).unwrap(), false)
        .unwrap();

    let labels: Vec<String> = store
        .list_records()
        .unwrap()
        .into_iter()
        .map(|r| r.label)
        .collect();
    assert_eq!(labels, vec!["alpha", "zeta"]);
}

#[test]
fn delete_record_removes_file() {
    let fx = fixture();
    let (store, _) = VaultStore::open(&fx.paths).unwrap();
    store
        .write_record("gone", &Record::credential("u", "p").unwrap(), false)
        .unwrap();

    store.delete_record("gone").unwrap();
    assert!(!store.contains("gone"));
    assert!(matches!(
        store.read_record("gone"),
        Err(SafeZoneError::RecordNotFound(_))
    ));
    assert!(matches!(
        store.delete_record("gone"),
        Err(SafeZoneError::RecordNotFound(_))
    ));
}

#[test]
fn reset_orphans_existing_records() {
    let fx = fixture();
    let (store, _) = VaultStore::open(&fx.paths).unwrap();
    let record = Record::credential("bob", "hunter2").unwrap();
    store.write_record("work", &record, false).unwrap();

    let fresh = VaultStore::reset(&fx.paths).unwrap();
    assert_ne!(
        fresh.bundle().primary().as_bytes(),
        store.bundle().primary().as_bytes()
    );

    // The new bundle verifies, but the old record no longer decodes to what was written.
    let (reopened, provisioning) = VaultStore::open(&fx.paths).unwrap();
    assert_eq!(provisioning, Provisioning::Verified);
    match reopened.read_record("work") {
        Ok(decoded) => assert_ne!(decoded, record),
        Err(e) => assert!(matches!(e, SafeZoneError::DecryptionFailed)),
    }
}

#[cfg(unix)]
#[test]
fn record_files_are_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let fx = fixture();
    let (store, _) = VaultStore::open(&fx.paths).unwrap();
    store
        .write_record("private", &Record::credential("u", "p").unwrap(), false)
        .unwrap();

    let mode = fs::metadata(record_path(&fx.paths.vault_dir, "private"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}
