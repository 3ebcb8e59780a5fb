// glloader/build.rs
//
//! The `glloader` build script.
//!
//! Reads the Khronos registry through `gl_generator` and partitions the GL commands into one
//! loader unit per known version plus one per tracked extension.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Every GL version the loader knows about, ascending.
const VERSIONS: [(u8, u8); 19] = [
    (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5),
    (2, 0), (2, 1),
    (3, 0), (3, 1), (3, 2), (3, 3),
    (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
];

/// Extensions whose entry points get their own loader unit.
const EXTENSIONS: [&str; 8] = [
    "GL_ARB_buffer_storage",
    "GL_ARB_debug_output",
    "GL_ARB_framebuffer_object",
    "GL_ARB_sync",
    "GL_ARB_texture_storage",
    "GL_ARB_vertex_array_object",
    "GL_EXT_framebuffer_object",
    "GL_KHR_debug",
];

fn command_names(registry: &Registry) -> BTreeSet<String> {
    registry.cmds.iter().map(|cmd| cmd.proto.ident.clone()).collect()
}

fn registry(version: (u8, u8), extensions: &[&str]) -> Registry {
    Registry::new(Api::Gl, version, Profile::Compatibility, Fallbacks::None, extensions)
}

fn write_versions(dest: &mut impl Write) -> io::Result<()> {
    writeln!(dest, "gl_versions! {{")?;
    for (bit, &(major, minor)) in VERSIONS.iter().enumerate() {
        writeln!(dest, "    VERSION_{}_{} = ({}, {}) @ {},", major, minor, major, minor, bit)?;
    }
    writeln!(dest, "}}")
}

fn write_entry_points(full: &Registry, dest: &mut impl Write) -> io::Result<()> {
    writeln!(dest, "gl_entry_points! {{")?;

    writeln!(dest, "    fields {{")?;
    let mut seen = BTreeSet::new();
    for cmd in &full.cmds {
        if !seen.insert(cmd.proto.ident.clone()) {
            continue;
        }
        let params: Vec<String> = cmd.params.iter().map(|param| param.ty.to_string()).collect();
        writeln!(
            dest,
            "        {}: fn({}) -> {},",
            cmd.proto.ident,
            params.join(", "),
            cmd.proto.ty
        )?;
    }
    writeln!(dest, "    }}")?;

    writeln!(dest, "    versions {{")?;
    let mut previous = BTreeSet::new();
    for &(major, minor) in VERSIONS.iter() {
        let current = command_names(&registry((major, minor), &[]));
        let introduced: Vec<&String> = current.difference(&previous).collect();
        write_unit(dest, &format!("VERSION_{}_{}", major, minor), &introduced)?;
        previous = current;
    }
    writeln!(dest, "    }}")?;

    writeln!(dest, "    extensions {{")?;
    let baseline = command_names(&registry((1, 0), &[]));
    let mut units = BTreeMap::new();
    for &extension in EXTENSIONS.iter() {
        let with_extension = command_names(&registry((1, 0), &[extension]));
        let added: Vec<String> = with_extension.difference(&baseline).cloned().collect();
        units.insert(extension, added);
    }
    for (extension, added) in &units {
        let added: Vec<&String> = added.iter().collect();
        write_unit(dest, &format!("{:?}", extension), &added)?;
    }
    writeln!(dest, "    }}")?;

    writeln!(dest, "}}")
}

fn write_unit(dest: &mut impl Write, key: &str, names: &[&String]) -> io::Result<()> {
    writeln!(dest, "        {} => [", key)?;
    for name in names {
        writeln!(dest, "            {},", name)?;
    }
    writeln!(dest, "        ],")
}

fn main() -> io::Result<()> {
    cfg_aliases! {
        windows: { target_os = "windows" },
        macos: { target_os = "macos" },
        system_library: { feature = "system-library" },
        unix_library: { all(unix, feature = "system-library") },
        windows_library: { all(windows, feature = "system-library") },
    }

    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());
    let full = registry(VERSIONS[VERSIONS.len() - 1], &EXTENSIONS);

    let mut file = BufWriter::new(File::create(dest.join("gl_bindings.rs"))?);
    full.write_bindings(StructGenerator, &mut file)?;
    file.flush()?;

    let mut file = BufWriter::new(File::create(dest.join("gl_versions.rs"))?);
    write_versions(&mut file)?;
    file.flush()?;

    let mut file = BufWriter::new(File::create(dest.join("gl_entry_points.rs"))?);
    write_entry_points(&full, &mut file)?;
    file.flush()?;

    Ok(())
}
