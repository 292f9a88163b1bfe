/// Builds an [`IniFile`](crate::IniFile) from section and key literals.
///
/// Each value may be any type implementing [`ToIniValue`](crate::ToIniValue).
/// Sections with no keys are created empty.
///
/// ```rust
/// use inifile::ini;
///
/// let ini = ini! {
///     "" => { "version" => 2 },
///     "server" => { "host" => "localhost", "port" => 8080, "tls" => false },
///     "empty" => {},
/// };
///
/// assert_eq!(ini.sections(), vec!["", "server", "empty"]);
/// assert_eq!(ini.to_string(), "version=2\n\n[server]\nhost=localhost\nport=8080\ntls=false\n\n[empty]\n");
/// ```
#[macro_export]
macro_rules! ini {
    () => {
        $crate::IniFile::new()
    };

    ($($section:expr => { $($key:expr => $value:expr),* $(,)? }),+ $(,)?) => {{
        let mut ini = $crate::IniFile::new();
        $(
            #[allow(unused_variables)]
            let section = ini.section_mut($section);
            $(
                section.set($key, $value);
            )*
        )+
        ini
    }};
}
