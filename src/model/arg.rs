use clap::Parser;

/// Discord 账号查询服务
#[derive(Parser, Debug)]
#[command(name = "discord-lookup", version, about)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<String>,

    /// 监听地址（覆盖配置文件）
    #[arg(long)]
    pub host: Option<String>,

    /// 监听端口（覆盖配置文件）
    #[arg(short, long)]
    pub port: Option<u16>,
}
