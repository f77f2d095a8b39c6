//! Concrete generation scenarios.

use unipack_config::{
    BuildFlavor, BuildTarget, Classification, LibraryTarget, Plugin, ProjectRoot, RuntimeTarget,
    generate,
};

fn root() -> ProjectRoot {
    ProjectRoot::new("/srv/app").expect("absolute root")
}

#[test]
fn server_development() {
    let tree = generate(BuildTarget::Server, BuildFlavor::Development, &root());

    assert_eq!(tree.entry, vec!["webpack-hot-middleware/client", "./server"]);
    assert_eq!(tree.target, RuntimeTarget::Node);
    assert_eq!(tree.output.library_target, Some(LibraryTarget::Commonjs2));
    assert!(tree.has_plugin("HotModuleReplacementPlugin"));
    assert!(!tree.plugins.iter().any(Plugin::is_minifier));
    assert_eq!(
        tree.externals.classify("/srv/app/src", "express"),
        Classification::External("commonjs2 express".to_string())
    );
}

#[test]
fn client_production() {
    let tree = generate(BuildTarget::Client, BuildFlavor::Production, &root());

    assert_eq!(tree.entry, vec!["./client"]);
    assert_eq!(tree.target, RuntimeTarget::Web);
    assert_eq!(tree.output.library_target, None);
    assert_eq!(tree.output.public_path.as_deref(), Some("/"));
    assert!(tree.externals.is_empty());

    let position = |name: &str| {
        tree.plugins
            .iter()
            .position(|plugin| plugin.name() == name)
            .unwrap_or_else(|| panic!("{name} missing from pipeline"))
    };
    let dedupe = position("DedupePlugin");
    let define = position("DefinePlugin");
    let uglify = position("UglifyJsPlugin");
    assert!(dedupe < define && define < uglify);
}

#[test]
fn client_production_json_shape() {
    let tree = generate(BuildTarget::Client, BuildFlavor::Production, &root());
    let value: serde_json::Value =
        serde_json::from_str(&tree.to_json_pretty().expect("serialize")).expect("parse");

    assert_eq!(value["entry"], serde_json::json!(["./client"]));
    assert_eq!(value["externals"], serde_json::json!({}));
    assert_eq!(value["output"]["path"], "/srv/app/public");
    assert_eq!(value["output"]["filename"], "client.js");
    assert_eq!(value["output"]["publicPath"], "/");
    assert_eq!(value["output"]["pathinfo"], false);
    assert!(value["output"].get("libraryTarget").is_none());
    assert!(value.get("node").is_none());
    assert_eq!(value["devtool"], "source-map");
}

#[test]
fn server_production_keeps_sources_in_root() {
    let tree = generate(BuildTarget::Server, BuildFlavor::Production, &root());

    assert_eq!(tree.output.bundle_path(), root().path().join("server.js"));
    assert_eq!(tree.output.public_path, None);
    assert!(tree.module.rules[0].options.as_ref().expect("options").plugins.is_empty());
}

#[test]
fn client_development_polls_for_updates() {
    let tree = generate(BuildTarget::Client, BuildFlavor::Development, &root());

    assert_eq!(tree.entry, vec!["webpack/hot/poll?1000", "./client"]);
    assert!(!tree.has_plugin("BannerPlugin"));
    assert!(tree.has_plugin("NoErrorsPlugin"));
    assert!(tree.output.pathinfo);
}
