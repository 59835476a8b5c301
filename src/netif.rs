/// Network interface inspection: extracts the IPv4 address the VPN client
/// assigned to its tunnel interface.
use crate::probe::StatusProbe;

/// Address assigned to `name` (conventionally `tun0`), or `None` if the
/// interface status tool fails or reports no `inet` line.
///
/// The tool's output is scanned line by line for the token `inet`; the token
/// immediately following it is the address. Only the first match counts, so
/// secondary addresses and `inet6` lines are ignored.
pub fn interface_address(probe: &dyn StatusProbe, name: &str) -> Option<String> {
    let output = probe.query_interface(name)?;
    for line in output.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        for pair in tokens.windows(2) {
            if pair[0] == "inet" {
                return Some(pair[1].to_string());
            }
        }
    }
    tracing::debug!(interface = name, "no inet line in interface status output");
    None
}
